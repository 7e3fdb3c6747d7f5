//! Export dialog overlay
//!
//! Thin renderer over [`splatdeck_core::dialog::ExportDialog`]: one rsx row
//! per visible row, setters wired straight to the core model, keyboard
//! handling delegated to [`key_response`]. No export logic lives here.

use dioxus::prelude::*;

use splatdeck_core::prelude::*;

use crate::state::AppState;

/// Modal overlay shown while an export session is open
#[component]
pub fn ExportDialogOverlay() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    // Clone the form state for this render; mutations go through setters
    let Some(dialog) = state.read().dialog.clone() else {
        return rsx! {};
    };

    let rows = dialog.visible_rows();

    rsx! {
        div {
            class: "export-overlay",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |evt| {
                match key_response(&evt.key().to_string(), evt.modifiers().shift()) {
                    KeyResponse::Confirm => state.write().confirm_export(),
                    KeyResponse::Cancel => state.write().cancel_export(),
                    // Keep keystrokes from reaching editor shortcuts
                    KeyResponse::Capture => evt.stop_propagation(),
                }
            },

            div { class: "export-dialog",
                div { class: "export-header", "Export Scene" }

                div { class: "export-content",
                    for row in rows {
                        {render_row(state, &dialog, row)}
                    }
                }

                div { class: "export-footer",
                    button {
                        class: "export-btn-secondary",
                        onclick: move |_| state.write().cancel_export(),
                        "Cancel"
                    }
                    button {
                        class: "export-btn-primary",
                        onclick: move |_| state.write().confirm_export(),
                        "Export"
                    }
                }
            }
        }
    }
}

/// Apply a setter to the open dialog, if any
fn with_dialog(mut state: Signal<AppState>, apply: impl FnOnce(&mut ExportDialog)) {
    if let Some(dialog) = state.write().dialog.as_mut() {
        apply(dialog);
    }
}

fn render_row(state: Signal<AppState>, dialog: &ExportDialog, row: Row) -> Element {
    match row {
        Row::OutputKind => {
            let output = dialog.viewer_output();
            rsx! {
                div { class: "export-row",
                    label { class: "export-label", "Type" }
                    select {
                        class: "export-select",
                        onchange: move |evt| {
                            let output = match evt.value().as_str() {
                                "zip" => ViewerOutput::Archive,
                                _ => ViewerOutput::SelfContainedPage,
                            };
                            with_dialog(state, |d| d.set_viewer_output(output));
                        },
                        option {
                            value: "html",
                            selected: output == ViewerOutput::SelfContainedPage,
                            "HTML page"
                        }
                        option {
                            value: "zip",
                            selected: output == ViewerOutput::Archive,
                            "Zip package"
                        }
                    }
                }
            }
        }
        Row::StartPosition => {
            let start = dialog.start_position();
            let pose_available = dialog.pose_start_available();
            rsx! {
                div { class: "export-row",
                    label { class: "export-label", "Start position" }
                    select {
                        class: "export-select",
                        onchange: move |evt| {
                            let start = match evt.value().as_str() {
                                "default" => StartPosition::Default,
                                "pose" => StartPosition::Pose,
                                _ => StartPosition::Viewport,
                            };
                            with_dialog(state, |d| d.set_start_position(start));
                        },
                        option {
                            value: "default",
                            selected: start == StartPosition::Default,
                            "Default"
                        }
                        option {
                            value: "viewport",
                            selected: start == StartPosition::Viewport,
                            "Viewport"
                        }
                        option {
                            value: "pose",
                            selected: start == StartPosition::Pose,
                            disabled: !pose_available,
                            "Pose camera"
                        }
                    }
                }
            }
        }
        Row::Animation => {
            let animation = dialog.animation();
            let track_available = dialog.track_available();
            rsx! {
                div { class: "export-row",
                    label { class: "export-label", "Animation" }
                    select {
                        class: "export-select",
                        disabled: !track_available,
                        onchange: move |evt| {
                            let animation = match evt.value().as_str() {
                                "track" => AnimationMode::Track,
                                _ => AnimationMode::None,
                            };
                            with_dialog(state, |d| d.set_animation(animation));
                        },
                        option {
                            value: "none",
                            selected: animation == AnimationMode::None,
                            "None"
                        }
                        option {
                            value: "track",
                            selected: animation == AnimationMode::Track,
                            disabled: !track_available,
                            "Camera track"
                        }
                    }
                }
            }
        }
        Row::BackgroundColor => {
            let hex = rgba_to_hex(dialog.background());
            rsx! {
                div { class: "export-row",
                    label { class: "export-label", "Background color" }
                    input {
                        r#type: "color",
                        class: "export-color",
                        value: "{hex}",
                        oninput: move |evt| {
                            if let Some(color) = hex_to_rgba(&evt.value()) {
                                with_dialog(state, |d| d.set_background(color));
                            }
                        }
                    }
                }
            }
        }
        Row::FieldOfView => {
            let fov = dialog.fov();
            rsx! {
                div { class: "export-row",
                    label { class: "export-label", "Field of view: {fov:.0}" }
                    input {
                        r#type: "range",
                        class: "export-slider",
                        min: "10",
                        max: "120",
                        step: "1",
                        value: "{fov}",
                        oninput: move |evt| {
                            if let Ok(fov) = evt.value().parse::<f32>() {
                                with_dialog(state, |d| d.set_fov(fov));
                            }
                        }
                    }
                }
            }
        }
        Row::Compression => {
            let compressed = dialog.compressed();
            rsx! {
                div { class: "export-row",
                    label { class: "export-label", "Compress" }
                    input {
                        r#type: "checkbox",
                        class: "export-toggle",
                        checked: compressed,
                        onchange: move |evt| {
                            with_dialog(state, |d| d.set_compressed(evt.checked()));
                        }
                    }
                }
            }
        }
        Row::SplatSelector => {
            let selection = dialog.selection();
            let enabled = dialog.selector_enabled();
            let names = dialog.splat_names().to_vec();
            rsx! {
                div { class: "export-row",
                    label { class: "export-label", "Splats" }
                    select {
                        class: "export-select",
                        disabled: !enabled,
                        onchange: move |evt| {
                            let selection = match evt.value().parse::<usize>() {
                                Ok(idx) => SplatSelection::Index(idx),
                                Err(_) => SplatSelection::All,
                            };
                            with_dialog(state, |d| d.set_selection(selection));
                        },
                        option {
                            value: "all",
                            selected: selection == SplatSelection::All,
                            "All splats"
                        }
                        for (idx, name) in names.into_iter().enumerate() {
                            option {
                                value: "{idx}",
                                selected: selection == SplatSelection::Index(idx),
                                "{name}"
                            }
                        }
                    }
                }
            }
        }
        Row::ShBands => {
            let bands = dialog.sh_bands();
            rsx! {
                div { class: "export-row",
                    label { class: "export-label", "SH bands: {bands}" }
                    input {
                        r#type: "range",
                        class: "export-slider",
                        min: "0",
                        max: "3",
                        step: "1",
                        value: "{bands}",
                        oninput: move |evt| {
                            if let Ok(bands) = evt.value().parse::<u8>() {
                                with_dialog(state, |d| d.set_sh_bands(bands));
                            }
                        }
                    }
                }
            }
        }
        Row::Filename => {
            let filename = dialog.filename().to_string();
            rsx! {
                div { class: "export-row",
                    label { class: "export-label", "Filename" }
                    input {
                        r#type: "text",
                        class: "export-filename",
                        value: "{filename}",
                        oninput: move |evt| {
                            with_dialog(state, |d| d.set_filename(evt.value()));
                        }
                    }
                }
            }
        }
    }
}

/// Format an RGBA color as the `#rrggbb` string the color input expects
fn rgba_to_hex(color: Rgba) -> String {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(color[0]),
        to_byte(color[1]),
        to_byte(color[2])
    )
}

/// Parse a `#rrggbb` string back into an opaque RGBA color
fn hex_to_rgba(hex: &str) -> Option<Rgba> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        1.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(rgba_to_hex([1.0, 1.0, 1.0, 1.0]), "#ffffff");
        assert_eq!(rgba_to_hex([0.0, 0.0, 0.0, 1.0]), "#000000");

        let parsed = hex_to_rgba("#ff8000").unwrap();
        assert_relative_eq!(parsed[0], 1.0);
        assert_relative_eq!(parsed[1], 128.0 / 255.0);
        assert_relative_eq!(parsed[2], 0.0);
        assert_relative_eq!(parsed[3], 1.0);
    }

    #[test]
    fn test_hex_rejects_malformed_input() {
        assert_eq!(hex_to_rgba("ffffff"), None);
        assert_eq!(hex_to_rgba("#fff"), None);
        assert_eq!(hex_to_rgba("#zzzzzz"), None);
    }
}
