//! Export configuration types
//!
//! [`ExportOptions`] is the dialog's sole output artifact: a mode-tagged,
//! fully populated description of one export operation, handed to a
//! caller-supplied export routine. The viewer variants additionally carry
//! [`ExperienceSettings`], which is serialized verbatim into the generated
//! viewer page.

use glam::Vec3;
use serde::ser::Serializer;
use serde::Serialize;

use crate::Result;
use crate::track::{AnimationTrack, CAMERA_TRACK_NAME};

/// RGBA color, components in `0.0..=1.0`
pub type Rgba = [f32; 4];

/// What kind of artifact the export produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// Raw gaussian point cloud (`.ply`)
    #[default]
    RawPoints,

    /// Pre-compressed gaussian point cloud (`.compressed.ply`)
    RawPointsCompressed,

    /// Archive of splat primitives (`.splat`), no SH or compression semantics
    SplatArchive,

    /// Self-contained interactive viewer (`.html` page or `.zip` package)
    InteractiveViewer,
}

/// Viewer export packaging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewerOutput {
    /// Single self-contained HTML page
    #[default]
    SelfContainedPage,

    /// Zip package with separate scene data
    Archive,
}

impl ViewerOutput {
    /// File extension for this packaging
    pub fn extension(&self) -> &'static str {
        match self {
            Self::SelfContainedPage => ".html",
            Self::Archive => ".zip",
        }
    }
}

/// Which splats of a multi-splat scene to include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplatSelection {
    /// Every splat in the scene
    #[default]
    All,

    /// A single splat, by scene index
    Index(usize),
}

impl Serialize for SplatSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Index(idx) => serializer.serialize_u64(*idx as u64),
        }
    }
}

/// Settings forwarded to the splat serializer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializeSettings {
    /// Spherical harmonics band cap (0..=3); `None` for formats without SH
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_spherical_harmonics_bands: Option<u8>,
}

/// How the embedded viewer starts its camera animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StartAnimation {
    /// Static camera at the start pose
    #[default]
    None,

    /// Play the derived camera track on load
    CameraTrack,
}

/// Initial camera state baked into a viewer export
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSettings {
    pub field_of_view: f32,
    pub start_position: Option<[f32; 3]>,
    pub start_target: Option<[f32; 3]>,
    pub start_animation: StartAnimation,
    pub track_ref: Option<String>,
}

/// Viewer background
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Background {
    pub color: Rgba,
}

/// Everything the generated viewer needs beyond the scene data itself
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSettings {
    pub camera: CameraSettings,
    pub background: Background,
    pub animation_tracks: Vec<AnimationTrack>,
}

impl ExperienceSettings {
    /// Assemble viewer settings from the confirmed dialog choices.
    ///
    /// `start_pose` is the resolved starting camera (or `None` for the
    /// viewer's built-in default framing); `track` is present only when the
    /// user chose track playback.
    pub fn new(
        field_of_view: f32,
        start_pose: Option<(Vec3, Vec3)>,
        start_animation: StartAnimation,
        background: Rgba,
        track: Option<AnimationTrack>,
    ) -> Self {
        Self {
            camera: CameraSettings {
                field_of_view,
                start_position: start_pose.map(|(p, _)| p.to_array()),
                start_target: start_pose.map(|(_, t)| t.to_array()),
                start_animation,
                track_ref: match start_animation {
                    StartAnimation::CameraTrack => Some(CAMERA_TRACK_NAME.to_string()),
                    StartAnimation::None => None,
                },
            },
            background: Background { color: background },
            animation_tracks: track.into_iter().collect(),
        }
    }

    /// Serialize to the JSON payload embedded in the viewer page
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Viewer-only export settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerSettings {
    pub output: ViewerOutput,
    pub experience: ExperienceSettings,
}

/// The assembled result of one confirmed export dialog session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Output filename, extension kept in sync with the active mode
    pub filename: String,

    /// Which splat(s) to include
    pub selection: SplatSelection,

    /// Serializer settings for the chosen format
    pub serialize_settings: SerializeSettings,

    /// Whether to write the compressed point format (raw-points modes only)
    pub compressed: bool,

    /// Viewer packaging and experience, present only for viewer exports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer: Option<ViewerSettings>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_serializes_as_all_or_index() {
        assert_eq!(
            serde_json::to_value(SplatSelection::All).unwrap(),
            serde_json::json!("all")
        );
        assert_eq!(
            serde_json::to_value(SplatSelection::Index(2)).unwrap(),
            serde_json::json!(2)
        );
    }

    #[test]
    fn test_experience_settings_field_names() {
        let settings = ExperienceSettings::new(
            60.0,
            Some((Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO)),
            StartAnimation::CameraTrack,
            [1.0, 1.0, 1.0, 1.0],
            None,
        );
        let json = serde_json::to_value(&settings).unwrap();

        assert_eq!(json["camera"]["fieldOfView"], 60.0);
        assert_eq!(json["camera"]["startPosition"][0], 1.0);
        assert_eq!(json["camera"]["startAnimation"], "cameraTrack");
        assert_eq!(json["camera"]["trackRef"], "cameraAnim");
        assert_eq!(json["background"]["color"][3], 1.0);
        assert!(json["animationTracks"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_experience_settings_json_payload() {
        let settings = ExperienceSettings::new(
            60.0,
            None,
            StartAnimation::None,
            [0.5, 0.5, 0.5, 1.0],
            None,
        );
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"fieldOfView\":60.0"));
        assert!(json.contains("\"animationTracks\":[]"));
    }

    #[test]
    fn test_no_track_ref_without_track_playback() {
        let settings = ExperienceSettings::new(
            45.0,
            None,
            StartAnimation::None,
            [0.0, 0.0, 0.0, 1.0],
            None,
        );
        assert_eq!(settings.camera.track_ref, None);
        assert_eq!(settings.camera.start_position, None);

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["camera"]["startAnimation"], "none");
    }
}
