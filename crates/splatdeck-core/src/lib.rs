//! # Splatdeck Core
//!
//! Headless model for the scene export dialog of the Splatdeck editor.
//!
//! The dialog collects user intent about an export operation — raw `.ply`
//! points, a compressed variant, a `.splat` archive, or a self-contained
//! interactive viewer — and assembles it into a validated, mode-specific
//! [`ExportOptions`](options::ExportOptions) value. Everything here is pure
//! state: the UI layer is a thin renderer over [`dialog::ExportDialog`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use splatdeck_core::prelude::*;
//!
//! let snapshot = SceneSnapshot::capture(&scene);
//! let mut dialog = ExportDialog::open(
//!     ExportMode::InteractiveViewer,
//!     snapshot,
//!     vec!["garden.ply".to_string()],
//!     true,
//! );
//! dialog.set_viewer_output(ViewerOutput::Archive);
//! let options = dialog.confirm();
//! ```
//!
//! ## Conventions
//!
//! - **Frames**: integer timeline frames; pose frames outside
//!   `0..total_frames` are discarded when the dialog opens
//! - **Angles**: field of view is in degrees, as presented to the user
//! - **Colors**: RGBA, `f32` components in `0.0..=1.0`

pub mod dialog;
pub mod filename;
pub mod options;
pub mod pose;
pub mod scene;
pub mod track;

mod error;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dialog::{
        AnimationMode, DialogOutcome, ExportDialog, KeyResponse, Row, StartPosition, key_response,
    };
    pub use crate::filename::with_extension;
    pub use crate::options::{
        ExperienceSettings, ExportMode, ExportOptions, Rgba, SerializeSettings, SplatSelection,
        StartAnimation, ViewerOutput, ViewerSettings,
    };
    pub use crate::pose::{CameraPose, ordered_poses};
    pub use crate::scene::{SceneQueries, SceneSnapshot};
    pub use crate::track::{AnimationTrack, derive_camera_track};

    // Math (re-export glam)
    pub use glam::Vec3;

    // Error handling
    pub use crate::{Error, Result};
}
