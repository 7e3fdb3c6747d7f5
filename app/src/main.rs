//! Splatdeck Studio - Desktop shell for splat scene export
//!
//! A thin toolbar over the demo scene plus the export dialog overlay. The
//! export flow is the promise-style contract from `splatdeck-core`: open
//! the dialog, await the resolved options, hand them to the export routine
//! (here, logged as JSON — serialization itself is a separate concern).

mod export_dialog;
mod scene;
mod state;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing::{info, warn};

use splatdeck_core::prelude::*;
use state::AppState;

fn main() {
    tracing_subscriber::fmt::init();

    let window = WindowBuilder::new()
        .with_title("Splatdeck Studio")
        .with_inner_size(LogicalSize::new(900.0, 640.0));

    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(AppState::new()));
    let state = use_context::<Signal<AppState>>();

    let dialog_open = state.read().dialog_open();
    let splat_count = state.read().scene.splats.len();

    rsx! {
        style { {include_str!("../assets/theme.css")} }
        style { {include_str!("../assets/export-dialog.css")} }

        div { class: "app-container",
            div { class: "toolbar",
                span { class: "toolbar-title", "Splatdeck Studio" }
                button {
                    class: "toolbar-btn",
                    onclick: move |_| request_export(state, ExportMode::RawPoints),
                    "Export PLY"
                }
                button {
                    class: "toolbar-btn",
                    onclick: move |_| request_export(state, ExportMode::RawPointsCompressed),
                    "Export compressed PLY"
                }
                button {
                    class: "toolbar-btn",
                    onclick: move |_| request_export(state, ExportMode::SplatArchive),
                    "Export splat"
                }
                button {
                    class: "toolbar-btn",
                    onclick: move |_| request_export(state, ExportMode::InteractiveViewer),
                    "Export viewer"
                }
            }

            div { class: "viewport-placeholder",
                "{splat_count} splats loaded"
            }

            if dialog_open {
                export_dialog::ExportDialogOverlay {}
            }
        }
    }
}

/// Run one export flow: open the dialog, await the outcome, hand confirmed
/// options to the (stubbed) export routine
fn request_export(mut state: Signal<AppState>, mode: ExportMode) {
    spawn(async move {
        let pending = state.write().show_export(mode);

        match pending.await {
            Ok(DialogOutcome::Confirmed(options)) => perform_export(&options),
            Ok(DialogOutcome::Cancelled) => info!("export cancelled"),
            Err(_) => warn!("export dialog dropped without resolving"),
        }
    });
}

/// Caller-side consumer of the assembled options. A real build would feed
/// these to the splat serializer; the demo logs the payload.
fn perform_export(options: &ExportOptions) {
    info!(filename = %options.filename, "export confirmed");
    match serde_json::to_string_pretty(options) {
        Ok(json) => info!("export options:\n{json}"),
        Err(e) => warn!("failed to serialize export options: {e}"),
    }
}
