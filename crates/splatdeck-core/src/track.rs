//! Camera animation track derivation
//!
//! Viewer exports can embed a camera fly-through built from the poses the
//! user recorded on the timeline. The track is derived once when the export
//! is confirmed; it is authoring-time data, not a runtime evaluator.

use serde::Serialize;

use crate::pose::CameraPose;

/// Track name referenced by `ExperienceSettings::camera::track_ref`
pub const CAMERA_TRACK_NAME: &str = "cameraAnim";

/// Keyframe playback loop behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoopMode {
    None,
    #[default]
    Repeat,
    PingPong,
}

/// Keyframe interpolation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Interpolation {
    Step,
    Linear,
    #[default]
    Spline,
}

/// Parallel keyframe arrays: one time per retained pose, three floats per
/// pose in each value array
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Keyframes {
    pub times: Vec<u32>,
    pub values: KeyframeValues,
}

/// Flattened per-keyframe camera values
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct KeyframeValues {
    pub position: Vec<f32>,
    pub target: Vec<f32>,
}

/// A derived animation track, serialized into the viewer experience payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationTrack {
    pub name: String,
    pub duration_seconds: f32,
    pub frame_rate: f32,
    pub target_object: String,
    pub loop_mode: LoopMode,
    pub interpolation: Interpolation,
    pub keyframes: Keyframes,
}

/// Build the camera track from an already ordered pose list.
///
/// `poses` must come from [`crate::pose::ordered_poses`]; times are emitted
/// in that order, one keyframe per pose. An empty pose list yields an empty
/// keyframe set.
pub fn derive_camera_track(
    poses: &[CameraPose],
    total_frames: u32,
    frame_rate: f32,
) -> AnimationTrack {
    let mut times = Vec::with_capacity(poses.len());
    let mut position = Vec::with_capacity(poses.len() * 3);
    let mut target = Vec::with_capacity(poses.len() * 3);

    for pose in poses {
        times.push(pose.frame);
        position.extend_from_slice(&pose.position.to_array());
        target.extend_from_slice(&pose.target.to_array());
    }

    AnimationTrack {
        name: CAMERA_TRACK_NAME.to_string(),
        duration_seconds: total_frames as f32 / frame_rate,
        frame_rate,
        target_object: "camera".to_string(),
        loop_mode: LoopMode::Repeat,
        interpolation: Interpolation::Spline,
        keyframes: Keyframes {
            times,
            values: KeyframeValues { position, target },
        },
    }
}
