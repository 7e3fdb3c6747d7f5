//! Scene state queries
//!
//! The dialog never owns editor state. It pulls what it needs through
//! [`SceneQueries`] exactly once, when it opens, into a [`SceneSnapshot`].
//! There is no reactive subscription: edits made while the dialog is open
//! are not reflected until the next session.

use glam::Vec3;

use crate::options::Rgba;
use crate::pose::{CameraPose, ordered_poses};

/// Read-only view of the editor state the export dialog depends on
pub trait SceneQueries {
    /// Timeline length in frames
    fn total_frames(&self) -> u32;

    /// Timeline playback rate in frames per second
    fn frame_rate(&self) -> f32;

    /// Recorded camera poses, in authoring order
    fn camera_poses(&self) -> Vec<CameraPose>;

    /// Current viewport camera as a (position, target) pair
    fn viewport_pose(&self) -> (Vec3, Vec3);

    /// Current viewport field of view in degrees
    fn camera_fov(&self) -> f32;

    /// Current viewport background color
    fn background_color(&self) -> Rgba;

    /// Spherical harmonics bands currently shown in the viewport
    fn sh_bands(&self) -> u8;
}

/// One-shot capture of everything a dialog session reads from the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub total_frames: u32,
    pub frame_rate: f32,
    /// Poses filtered to the timeline range, sorted by frame
    pub poses: Vec<CameraPose>,
    pub viewport_pose: (Vec3, Vec3),
    pub fov: f32,
    pub background: Rgba,
    pub sh_bands: u8,
}

impl SceneSnapshot {
    /// Capture the current scene state, ordering the pose list up front
    pub fn capture(scene: &dyn SceneQueries) -> Self {
        let total_frames = scene.total_frames();
        Self {
            total_frames,
            frame_rate: scene.frame_rate(),
            poses: ordered_poses(&scene.camera_poses(), total_frames),
            viewport_pose: scene.viewport_pose(),
            fov: scene.camera_fov(),
            background: scene.background_color(),
            sh_bands: scene.sh_bands(),
        }
    }

    /// Whether any poses survived the timeline filter
    pub fn has_poses(&self) -> bool {
        !self.poses.is_empty()
    }

    /// First pose of the ordered list, the start pose for pose-based exports
    pub fn first_pose(&self) -> Option<&CameraPose> {
        self.poses.first()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal scene used across the dialog tests
    pub(crate) struct TestScene {
        pub poses: Vec<CameraPose>,
        pub total_frames: u32,
    }

    impl Default for TestScene {
        fn default() -> Self {
            Self {
                poses: Vec::new(),
                total_frames: 180,
            }
        }
    }

    impl SceneQueries for TestScene {
        fn total_frames(&self) -> u32 {
            self.total_frames
        }

        fn frame_rate(&self) -> f32 {
            30.0
        }

        fn camera_poses(&self) -> Vec<CameraPose> {
            self.poses.clone()
        }

        fn viewport_pose(&self) -> (Vec3, Vec3) {
            (Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO)
        }

        fn camera_fov(&self) -> f32 {
            60.0
        }

        fn background_color(&self) -> Rgba {
            [1.0, 1.0, 1.0, 1.0]
        }

        fn sh_bands(&self) -> u8 {
            3
        }
    }

    #[test]
    fn test_capture_orders_poses() {
        let scene = TestScene {
            poses: vec![
                CameraPose {
                    frame: 50,
                    position: Vec3::X,
                    target: Vec3::ZERO,
                },
                CameraPose {
                    frame: 10,
                    position: Vec3::Y,
                    target: Vec3::ZERO,
                },
                CameraPose {
                    frame: 500,
                    position: Vec3::Z,
                    target: Vec3::ZERO,
                },
            ],
            ..TestScene::default()
        };

        let snapshot = SceneSnapshot::capture(&scene);
        assert!(snapshot.has_poses());
        assert_eq!(snapshot.poses.len(), 2);
        assert_eq!(snapshot.first_pose().unwrap().frame, 10);
    }

    #[test]
    fn test_capture_empty_scene() {
        let snapshot = SceneSnapshot::capture(&TestScene::default());
        assert!(!snapshot.has_poses());
        assert_eq!(snapshot.first_pose(), None);
        assert_eq!(snapshot.sh_bands, 3);
    }
}
