//! Demo scene backing the studio shell
//!
//! Stands in for the full editor: a couple of loaded splats, a timeline,
//! and a handful of recorded camera poses. Implements the query contract
//! the export dialog reads its snapshot through.

use glam::Vec3;
use splatdeck_core::prelude::*;

/// A loaded splat asset (opaque to the export dialog; only the name is
/// surfaced)
pub struct SplatAsset {
    pub name: String,
}

/// Scene state the export dialog queries at open time
pub struct DemoScene {
    pub splats: Vec<SplatAsset>,
    pub total_frames: u32,
    pub frame_rate: f32,
    pub poses: Vec<CameraPose>,
    pub viewport_position: Vec3,
    pub viewport_target: Vec3,
    pub fov: f32,
    pub background: Rgba,
    pub sh_bands: u8,
}

impl DemoScene {
    /// A small scene with a recorded fly-through, enough to exercise every
    /// dialog row
    pub fn sample() -> Self {
        Self {
            splats: vec![
                SplatAsset {
                    name: "garden.ply".to_string(),
                },
                SplatAsset {
                    name: "fountain.ply".to_string(),
                },
            ],
            total_frames: 180,
            frame_rate: 30.0,
            poses: vec![
                CameraPose {
                    frame: 0,
                    position: Vec3::new(0.0, 2.0, 8.0),
                    target: Vec3::ZERO,
                },
                CameraPose {
                    frame: 90,
                    position: Vec3::new(6.0, 3.0, 0.0),
                    target: Vec3::new(0.0, 1.0, 0.0),
                },
                CameraPose {
                    frame: 179,
                    position: Vec3::new(0.0, 2.0, -8.0),
                    target: Vec3::ZERO,
                },
            ],
            viewport_position: Vec3::new(0.0, 1.5, 5.0),
            viewport_target: Vec3::ZERO,
            fov: 60.0,
            background: [1.0, 1.0, 1.0, 1.0],
            sh_bands: 3,
        }
    }

    /// Names offered by the dialog's splat selector
    pub fn splat_names(&self) -> Vec<String> {
        self.splats.iter().map(|s| s.name.clone()).collect()
    }
}

impl SceneQueries for DemoScene {
    fn total_frames(&self) -> u32 {
        self.total_frames
    }

    fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    fn camera_poses(&self) -> Vec<CameraPose> {
        self.poses.clone()
    }

    fn viewport_pose(&self) -> (Vec3, Vec3) {
        (self.viewport_position, self.viewport_target)
    }

    fn camera_fov(&self) -> f32 {
        self.fov
    }

    fn background_color(&self) -> Rgba {
        self.background
    }

    fn sh_bands(&self) -> u8 {
        self.sh_bands
    }
}
