//! Core library for rendering text as scannable QR code and CODE 128
//! barcode PNG images.

mod output;
mod render;
mod sanitize;
mod symbology;

pub use output::{OutputConfig, write_png};
pub use render::{EncodeError, RenderOptions, render_barcode, render_qr};
pub use sanitize::{
    DEFAULT_FILENAME, MAX_INPUT_CHARS, sanitize_filename, sanitize_text, truncate_chars,
};
pub use symbology::{QR_SCANNER_WARN_CHARS, Request, Selection, Symbology};

use image::DynamicImage;

/// Render pre-truncated `text` for one symbology using that symbology's
/// default geometry.
pub fn render_symbology(symbology: Symbology, text: &str) -> Result<DynamicImage, EncodeError> {
    match symbology {
        Symbology::Qr => render_qr(text, &RenderOptions::qr()),
        Symbology::Code128 => render_barcode(text, &RenderOptions::barcode()),
    }
}
