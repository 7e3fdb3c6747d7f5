//! Application state management
//!
//! Holds the demo scene and the lifecycle of the export dialog: one session
//! at a time, opened with a state snapshot and settled exactly once through
//! a oneshot channel carrying the session outcome.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::warn;

use splatdeck_core::prelude::*;

use crate::scene::DemoScene;

/// Channel half that settles the pending export future
type ExportResponder = oneshot::Sender<DialogOutcome>;

/// Global application state
pub struct AppState {
    /// The scene being edited
    pub scene: DemoScene,
    /// Export dialog form state, `Some` while the dialog is open
    pub dialog: Option<ExportDialog>,
    /// Resolver for the in-flight export request. Kept outside the dialog
    /// so the overlay can settle it from either resolution path.
    responder: Arc<Mutex<Option<ExportResponder>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            scene: DemoScene::sample(),
            dialog: None,
            responder: Arc::new(Mutex::new(None)),
        }
    }

    /// Whether the export dialog is currently open
    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Open the export dialog and return the future that settles when the
    /// user confirms or cancels.
    ///
    /// Captures a snapshot of the scene at this instant; later edits are
    /// not reflected in the open dialog. Calling this while a session is
    /// already open is a caller error: the stale session is cancelled and
    /// a warning logged.
    pub fn show_export(&mut self, mode: ExportMode) -> oneshot::Receiver<DialogOutcome> {
        if self.dialog.is_some() {
            warn!("export dialog already open; cancelling the stale session");
            self.cancel_export();
        }

        let snapshot = SceneSnapshot::capture(&self.scene);
        self.dialog = Some(ExportDialog::open(
            mode,
            snapshot,
            self.scene.splat_names(),
            true,
        ));

        let (tx, rx) = oneshot::channel();
        *self.responder.lock() = Some(tx);
        rx
    }

    /// Confirm the open dialog: assemble options, resolve the future, hide
    pub fn confirm_export(&mut self) {
        if let Some(dialog) = self.dialog.take() {
            self.settle(DialogOutcome::Confirmed(dialog.confirm()));
        }
    }

    /// Cancel the open dialog: resolve the future as cancelled, hide
    pub fn cancel_export(&mut self) {
        if self.dialog.take().is_some() {
            self.settle(DialogOutcome::Cancelled);
        }
    }

    fn settle(&self, outcome: DialogOutcome) {
        if let Some(tx) = self.responder.lock().take() {
            // The receiver may have been dropped; nothing to do then
            let _ = tx.send(outcome);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
