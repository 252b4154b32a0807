//! Input text and output filename hygiene.

/// Hard cap on raw input length, applied after control characters are
/// stripped. Sits above every symbology cap so per-symbology truncation
/// stays observable.
pub const MAX_INPUT_CHARS: usize = 4096;

/// Fallback base name when `--filename` is omitted or nothing printable
/// survives sanitization.
pub const DEFAULT_FILENAME: &str = "encoded.png";

/// Characters that are illegal in filenames on at least one common host OS.
const INVALID_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Remove control characters and cap the raw input at [`MAX_INPUT_CHARS`].
pub fn sanitize_text(input: &str) -> String {
    input
        .chars()
        .filter(|ch| !ch.is_control())
        .take(MAX_INPUT_CHARS)
        .collect()
}

/// Cut `text` at `max_chars` Unicode scalar values. Returns the kept prefix
/// and the exact number of characters dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> (String, usize) {
    let total = text.chars().count();
    if total <= max_chars {
        return (text.to_string(), 0);
    }
    (text.chars().take(max_chars).collect(), total - max_chars)
}

/// Strip characters that cannot appear in a filename and enforce a `.png`
/// suffix. An empty result falls back to [`DEFAULT_FILENAME`].
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|ch| !ch.is_control() && !INVALID_FILENAME_CHARS.contains(ch))
        .collect();
    if cleaned.trim().is_empty() {
        return DEFAULT_FILENAME.to_string();
    }
    ensure_png_extension(cleaned)
}

fn ensure_png_extension(mut name: String) -> String {
    if !name.to_ascii_lowercase().ends_with(".png") {
        name.push_str(".png");
    }
    name
}
