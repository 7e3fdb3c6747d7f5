//! Export dialog state machine
//!
//! [`ExportDialog`] holds the form state for one dialog session: it is
//! created by [`ExportDialog::open`] with mode-appropriate defaults, mutated
//! through setters that keep the filename extension in sync, and consumed by
//! [`ExportDialog::confirm`] into an [`ExportOptions`]. The UI layer renders
//! whatever [`ExportDialog::visible_rows`] says and forwards key presses
//! through [`key_response`]; it holds no logic of its own.

use crate::filename::with_extension;
use crate::options::{
    ExperienceSettings, ExportMode, ExportOptions, Rgba, SerializeSettings, SplatSelection,
    StartAnimation, ViewerOutput, ViewerSettings,
};
use crate::scene::SceneSnapshot;
use crate::track::derive_camera_track;

/// The fixed universe of configuration rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    OutputKind,
    StartPosition,
    Animation,
    BackgroundColor,
    FieldOfView,
    Compression,
    SplatSelector,
    ShBands,
    Filename,
}

impl Row {
    /// Rows shown for a given export mode. Static policy: anything not
    /// listed here is hidden.
    pub fn for_mode(mode: ExportMode) -> &'static [Row] {
        match mode {
            ExportMode::RawPoints | ExportMode::RawPointsCompressed => &[
                Row::Compression,
                Row::SplatSelector,
                Row::ShBands,
                Row::Filename,
            ],
            ExportMode::SplatArchive => &[Row::SplatSelector, Row::Filename],
            ExportMode::InteractiveViewer => &[
                Row::OutputKind,
                Row::StartPosition,
                Row::Animation,
                Row::BackgroundColor,
                Row::FieldOfView,
                Row::SplatSelector,
                Row::ShBands,
                Row::Filename,
            ],
        }
    }
}

/// Where the exported viewer's camera starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPosition {
    /// Viewer's built-in default framing
    Default,

    /// Current viewport camera
    #[default]
    Viewport,

    /// First recorded pose on the timeline
    Pose,
}

/// Whether the viewer plays the derived camera track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    #[default]
    None,
    Track,
}

/// What the dialog should do with a key press while open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Confirm the export
    Confirm,
    /// Cancel the session
    Cancel,
    /// Swallow the key so it does not reach the rest of the app
    Capture,
}

/// Keyboard mapping while the dialog is open: Enter (without shift)
/// confirms, Escape cancels, everything else is captured.
pub fn key_response(key: &str, shift: bool) -> KeyResponse {
    match key {
        "Enter" if !shift => KeyResponse::Confirm,
        "Escape" => KeyResponse::Cancel,
        _ => KeyResponse::Capture,
    }
}

/// Result of one dialog session
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    /// User confirmed; carries the assembled options
    Confirmed(ExportOptions),
    /// User cancelled (button or Escape)
    Cancelled,
}

impl DialogOutcome {
    /// The confirmed options, or `None` for a cancelled session
    pub fn into_options(self) -> Option<ExportOptions> {
        match self {
            Self::Confirmed(options) => Some(options),
            Self::Cancelled => None,
        }
    }
}

/// Form state for one export dialog session
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDialog {
    mode: ExportMode,
    snapshot: SceneSnapshot,
    splat_names: Vec<String>,
    filename_editable: bool,

    filename: String,
    viewer_output: ViewerOutput,
    start_position: StartPosition,
    animation: AnimationMode,
    background: Rgba,
    fov: f32,
    compressed: bool,
    selection: SplatSelection,
    sh_bands: u8,
}

impl ExportDialog {
    /// Open a session with mode-appropriate defaults.
    ///
    /// Every field is reset from the snapshot and the splat list; nothing
    /// survives from previous sessions. `filename_editable` hides the
    /// filename row entirely when false (the caller will pick the file
    /// through a native dialog instead).
    pub fn open(
        mode: ExportMode,
        snapshot: SceneSnapshot,
        splat_names: Vec<String>,
        filename_editable: bool,
    ) -> Self {
        let has_poses = snapshot.has_poses();
        let stem = splat_names.first().cloned().unwrap_or_else(|| "scene".to_string());
        let viewer_output = ViewerOutput::default();
        let compressed = mode == ExportMode::RawPointsCompressed;

        let extension = match mode {
            ExportMode::RawPoints => ".ply",
            ExportMode::RawPointsCompressed => ".compressed.ply",
            ExportMode::SplatArchive => ".splat",
            ExportMode::InteractiveViewer => viewer_output.extension(),
        };

        Self {
            mode,
            filename: with_extension(&stem, extension),
            splat_names,
            filename_editable,
            viewer_output,
            start_position: if has_poses {
                StartPosition::Pose
            } else {
                StartPosition::Viewport
            },
            animation: if has_poses {
                AnimationMode::Track
            } else {
                AnimationMode::None
            },
            background: snapshot.background,
            fov: snapshot.fov,
            compressed,
            selection: SplatSelection::All,
            sh_bands: snapshot.sh_bands.min(3),
            snapshot,
        }
    }

    /// Active export mode for this session
    pub fn mode(&self) -> ExportMode {
        self.mode
    }

    /// Rows the UI should show: the mode's static row set, minus the
    /// filename row when filename editing is disabled
    pub fn visible_rows(&self) -> Vec<Row> {
        Row::for_mode(self.mode)
            .iter()
            .copied()
            .filter(|row| *row != Row::Filename || self.filename_editable)
            .collect()
    }

    /// Splat names offered by the selector row
    pub fn splat_names(&self) -> &[String] {
        &self.splat_names
    }

    /// The selector is a no-op with fewer than two splats
    pub fn selector_enabled(&self) -> bool {
        self.splat_names.len() > 1
    }

    /// Whether the animation selector may offer track playback
    pub fn track_available(&self) -> bool {
        self.snapshot.has_poses()
    }

    /// Whether the start-position selector may offer the recorded pose
    pub fn pose_start_available(&self) -> bool {
        self.snapshot.has_poses()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn viewer_output(&self) -> ViewerOutput {
        self.viewer_output
    }

    pub fn start_position(&self) -> StartPosition {
        self.start_position
    }

    pub fn animation(&self) -> AnimationMode {
        self.animation
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn compressed(&self) -> bool {
        self.compressed
    }

    pub fn selection(&self) -> SplatSelection {
        self.selection
    }

    pub fn sh_bands(&self) -> u8 {
        self.sh_bands
    }

    /// Replace the filename verbatim; the next toggle change re-applies the
    /// extension policy on top of whatever the user typed
    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    /// Toggle compressed output, swapping the filename extension
    pub fn set_compressed(&mut self, compressed: bool) {
        self.compressed = compressed;
        let ext = if compressed { ".compressed.ply" } else { ".ply" };
        self.filename = with_extension(&self.filename, ext);
    }

    /// Switch viewer packaging, swapping the filename extension
    pub fn set_viewer_output(&mut self, output: ViewerOutput) {
        self.viewer_output = output;
        self.filename = with_extension(&self.filename, output.extension());
    }

    /// Select the starting camera; the pose choice degrades to the viewport
    /// camera when no poses exist
    pub fn set_start_position(&mut self, start: StartPosition) {
        self.start_position = if start == StartPosition::Pose && !self.pose_start_available() {
            StartPosition::Viewport
        } else {
            start
        };
    }

    /// Select animation playback; track mode degrades to none when no poses
    /// exist
    pub fn set_animation(&mut self, animation: AnimationMode) {
        self.animation = if animation == AnimationMode::Track && !self.track_available() {
            AnimationMode::None
        } else {
            animation
        };
    }

    pub fn set_background(&mut self, background: Rgba) {
        self.background = background;
    }

    /// Field of view in degrees, clamped to the slider range
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov.clamp(10.0, 120.0);
    }

    /// Select which splat(s) to export; out-of-range indices fall back to
    /// the whole scene
    pub fn set_selection(&mut self, selection: SplatSelection) {
        self.selection = match selection {
            SplatSelection::Index(idx) if idx >= self.splat_names.len() => SplatSelection::All,
            other => other,
        };
    }

    pub fn set_sh_bands(&mut self, bands: u8) {
        self.sh_bands = bands.min(3);
    }

    /// Assemble the mode-specific options. Always succeeds: every field is
    /// UI-constrained, so there is no validation step.
    pub fn confirm(&self) -> ExportOptions {
        match self.mode {
            ExportMode::RawPoints | ExportMode::RawPointsCompressed => ExportOptions {
                filename: self.filename.clone(),
                selection: self.selection,
                serialize_settings: SerializeSettings {
                    max_spherical_harmonics_bands: Some(self.sh_bands),
                },
                compressed: self.compressed,
                viewer: None,
            },
            ExportMode::SplatArchive => ExportOptions {
                filename: self.filename.clone(),
                selection: self.selection,
                serialize_settings: SerializeSettings::default(),
                compressed: false,
                viewer: None,
            },
            ExportMode::InteractiveViewer => ExportOptions {
                filename: self.filename.clone(),
                selection: self.selection,
                serialize_settings: SerializeSettings {
                    max_spherical_harmonics_bands: Some(self.sh_bands),
                },
                compressed: false,
                viewer: Some(ViewerSettings {
                    output: self.viewer_output,
                    experience: self.assemble_experience(),
                }),
            },
        }
    }

    fn assemble_experience(&self) -> ExperienceSettings {
        let start_pose = match self.start_position {
            StartPosition::Default => None,
            StartPosition::Viewport => Some(self.snapshot.viewport_pose),
            StartPosition::Pose => self.snapshot.first_pose().map(|p| (p.position, p.target)),
        };

        let (start_animation, track) = match self.animation {
            AnimationMode::None => (StartAnimation::None, None),
            AnimationMode::Track => (
                StartAnimation::CameraTrack,
                Some(derive_camera_track(
                    &self.snapshot.poses,
                    self.snapshot.total_frames,
                    self.snapshot.frame_rate,
                )),
            ),
        };

        ExperienceSettings::new(self.fov, start_pose, start_animation, self.background, track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::CameraPose;
    use crate::scene::SceneSnapshot;
    use crate::scene::tests::TestScene;
    use glam::Vec3;

    fn snapshot_with_poses(frames: &[u32]) -> SceneSnapshot {
        let scene = TestScene {
            poses: frames
                .iter()
                .map(|&frame| CameraPose {
                    frame,
                    position: Vec3::new(frame as f32, 0.0, 0.0),
                    target: Vec3::new(0.0, frame as f32, 0.0),
                })
                .collect(),
            ..TestScene::default()
        };
        SceneSnapshot::capture(&scene)
    }

    fn empty_snapshot() -> SceneSnapshot {
        snapshot_with_poses(&[])
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_row_table_per_mode() {
        assert_eq!(
            Row::for_mode(ExportMode::RawPoints),
            &[Row::Compression, Row::SplatSelector, Row::ShBands, Row::Filename]
        );
        assert_eq!(
            Row::for_mode(ExportMode::RawPointsCompressed),
            Row::for_mode(ExportMode::RawPoints)
        );
        assert_eq!(
            Row::for_mode(ExportMode::SplatArchive),
            &[Row::SplatSelector, Row::Filename]
        );
        assert_eq!(
            Row::for_mode(ExportMode::InteractiveViewer),
            &[
                Row::OutputKind,
                Row::StartPosition,
                Row::Animation,
                Row::BackgroundColor,
                Row::FieldOfView,
                Row::SplatSelector,
                Row::ShBands,
                Row::Filename,
            ]
        );
    }

    #[test]
    fn test_filename_row_hidden_without_edit() {
        let dialog = ExportDialog::open(
            ExportMode::RawPoints,
            empty_snapshot(),
            names(&["scene.ply"]),
            false,
        );
        assert!(!dialog.visible_rows().contains(&Row::Filename));
        assert!(dialog.visible_rows().contains(&Row::Compression));
    }

    #[test]
    fn test_compression_toggle_swaps_extension() {
        let mut dialog = ExportDialog::open(
            ExportMode::RawPoints,
            empty_snapshot(),
            names(&["scene.ply"]),
            true,
        );
        assert_eq!(dialog.filename(), "scene.ply");

        dialog.set_compressed(true);
        assert_eq!(dialog.filename(), "scene.compressed.ply");

        dialog.set_compressed(false);
        assert_eq!(dialog.filename(), "scene.ply");
    }

    #[test]
    fn test_compressed_mode_opens_compressed() {
        let dialog = ExportDialog::open(
            ExportMode::RawPointsCompressed,
            empty_snapshot(),
            names(&["scene.ply"]),
            true,
        );
        assert!(dialog.compressed());
        assert_eq!(dialog.filename(), "scene.compressed.ply");
    }

    #[test]
    fn test_viewer_output_swaps_extension() {
        let mut dialog = ExportDialog::open(
            ExportMode::InteractiveViewer,
            empty_snapshot(),
            names(&["garden.ply"]),
            true,
        );
        assert_eq!(dialog.filename(), "garden.html");

        dialog.set_viewer_output(ViewerOutput::Archive);
        assert_eq!(dialog.filename(), "garden.zip");

        dialog.set_viewer_output(ViewerOutput::SelfContainedPage);
        assert_eq!(dialog.filename(), "garden.html");
    }

    #[test]
    fn test_user_typed_extension_stacks() {
        let mut dialog = ExportDialog::open(
            ExportMode::RawPoints,
            empty_snapshot(),
            names(&["scene.ply"]),
            true,
        );
        dialog.set_filename("renamed.obj");
        dialog.set_compressed(true);
        // Documented edge case: unrecognized extensions are preserved
        assert_eq!(dialog.filename(), "renamed.obj.compressed.ply");
    }

    #[test]
    fn test_defaults_follow_pose_availability() {
        let with_poses = ExportDialog::open(
            ExportMode::InteractiveViewer,
            snapshot_with_poses(&[4, 9]),
            names(&["a"]),
            true,
        );
        assert_eq!(with_poses.start_position(), StartPosition::Pose);
        assert_eq!(with_poses.animation(), AnimationMode::Track);
        assert!(with_poses.track_available());

        let without = ExportDialog::open(
            ExportMode::InteractiveViewer,
            empty_snapshot(),
            names(&["a"]),
            true,
        );
        assert_eq!(without.start_position(), StartPosition::Viewport);
        assert_eq!(without.animation(), AnimationMode::None);
        assert!(!without.track_available());
    }

    #[test]
    fn test_track_mode_degrades_without_poses() {
        let mut dialog = ExportDialog::open(
            ExportMode::InteractiveViewer,
            empty_snapshot(),
            names(&["a"]),
            true,
        );
        dialog.set_animation(AnimationMode::Track);
        assert_eq!(dialog.animation(), AnimationMode::None);

        dialog.set_start_position(StartPosition::Pose);
        assert_eq!(dialog.start_position(), StartPosition::Viewport);
    }

    #[test]
    fn test_selector_enabled_only_with_multiple_splats() {
        let single = ExportDialog::open(
            ExportMode::RawPoints,
            empty_snapshot(),
            names(&["only"]),
            true,
        );
        assert!(!single.selector_enabled());

        let mut multi = ExportDialog::open(
            ExportMode::RawPoints,
            empty_snapshot(),
            names(&["a", "b"]),
            true,
        );
        assert!(multi.selector_enabled());

        multi.set_selection(SplatSelection::Index(1));
        assert_eq!(multi.selection(), SplatSelection::Index(1));
        multi.set_selection(SplatSelection::Index(7));
        assert_eq!(multi.selection(), SplatSelection::All);
    }

    #[test]
    fn test_confirm_raw_points() {
        let mut dialog = ExportDialog::open(
            ExportMode::RawPoints,
            empty_snapshot(),
            names(&["scene.ply"]),
            true,
        );
        dialog.set_sh_bands(2);
        dialog.set_compressed(true);

        let options = dialog.confirm();
        assert_eq!(options.filename, "scene.compressed.ply");
        assert!(options.compressed);
        assert_eq!(options.serialize_settings.max_spherical_harmonics_bands, Some(2));
        assert!(options.viewer.is_none());
    }

    #[test]
    fn test_confirm_splat_archive_has_no_sh_semantics() {
        let dialog = ExportDialog::open(
            ExportMode::SplatArchive,
            empty_snapshot(),
            names(&["scene.ply"]),
            true,
        );
        let options = dialog.confirm();
        assert_eq!(options.filename, "scene.splat");
        assert!(!options.compressed);
        assert_eq!(options.serialize_settings.max_spherical_harmonics_bands, None);
    }

    #[test]
    fn test_confirm_viewer_with_pose_start_and_track() {
        let dialog = ExportDialog::open(
            ExportMode::InteractiveViewer,
            snapshot_with_poses(&[12, 3, 40]),
            names(&["garden"]),
            true,
        );

        let options = dialog.confirm();
        let viewer = options.viewer.unwrap();
        let camera = &viewer.experience.camera;

        // First sorted pose (frame 3) becomes the start camera
        assert_eq!(camera.start_position, Some([3.0, 0.0, 0.0]));
        assert_eq!(camera.start_target, Some([0.0, 3.0, 0.0]));
        assert_eq!(camera.start_animation, StartAnimation::CameraTrack);
        assert_eq!(camera.track_ref.as_deref(), Some("cameraAnim"));

        let tracks = &viewer.experience.animation_tracks;
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].keyframes.times, vec![3, 12, 40]);
    }

    #[test]
    fn test_confirm_viewer_without_track_omits_tracks() {
        let mut dialog = ExportDialog::open(
            ExportMode::InteractiveViewer,
            snapshot_with_poses(&[3]),
            names(&["garden"]),
            true,
        );
        dialog.set_animation(AnimationMode::None);
        dialog.set_start_position(StartPosition::Viewport);

        let viewer = dialog.confirm().viewer.unwrap();
        assert_eq!(viewer.experience.camera.start_animation, StartAnimation::None);
        assert_eq!(viewer.experience.camera.track_ref, None);
        assert!(viewer.experience.animation_tracks.is_empty());
        // Viewport camera from the snapshot
        assert_eq!(viewer.experience.camera.start_position, Some([0.0, 1.0, 5.0]));
    }

    #[test]
    fn test_confirm_viewer_default_start_has_no_camera() {
        let mut dialog = ExportDialog::open(
            ExportMode::InteractiveViewer,
            empty_snapshot(),
            names(&["garden"]),
            true,
        );
        dialog.set_start_position(StartPosition::Default);

        let viewer = dialog.confirm().viewer.unwrap();
        assert_eq!(viewer.experience.camera.start_position, None);
        assert_eq!(viewer.experience.camera.start_target, None);
    }

    #[test]
    fn test_key_response_mapping() {
        assert_eq!(key_response("Enter", false), KeyResponse::Confirm);
        assert_eq!(key_response("Enter", true), KeyResponse::Capture);
        assert_eq!(key_response("Escape", false), KeyResponse::Cancel);
        assert_eq!(key_response("a", false), KeyResponse::Capture);
        assert_eq!(key_response("Tab", false), KeyResponse::Capture);
    }

    #[test]
    fn test_fov_and_bands_clamped() {
        let mut dialog = ExportDialog::open(
            ExportMode::InteractiveViewer,
            empty_snapshot(),
            names(&["a"]),
            true,
        );
        dialog.set_fov(500.0);
        assert_eq!(dialog.fov(), 120.0);
        dialog.set_fov(1.0);
        assert_eq!(dialog.fov(), 10.0);
        dialog.set_sh_bands(9);
        assert_eq!(dialog.sh_bands(), 3);
    }
}
