//! Filename extension bookkeeping
//!
//! The filename entry is user-editable, but the on-disk extension follows
//! the active export mode and its toggles. Switching a toggle swaps the
//! recognized extension in place; a filename with an unrecognized extension
//! is left untouched and the new extension is appended on top. That can
//! produce a double extension — accepted behavior, not corrected.

/// Extensions the dialog knows how to swap, longest suffix first.
/// `.compressed.ply` must come before `.ply` or the strip would leave the
/// `.compressed` stem behind.
const KNOWN_EXTENSIONS: [&str; 5] = [".compressed.ply", ".ply", ".splat", ".html", ".zip"];

/// Strip a single recognized extension from `filename`, if present
pub fn strip_known_extension(filename: &str) -> &str {
    for ext in KNOWN_EXTENSIONS {
        if let Some(stem) = filename.strip_suffix(ext) {
            return stem;
        }
    }
    filename
}

/// Replace the recognized extension of `filename` with `ext`
pub fn with_extension(filename: &str, ext: &str) -> String {
    format!("{}{}", strip_known_extension(filename), ext)
}
