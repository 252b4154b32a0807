//! Rasterising encoded symbologies onto PNG-ready canvases.

mod barcode;
mod qr;

pub use barcode::render_barcode;
pub use qr::render_qr;

use image::{ImageBuffer, Rgba, RgbaImage};
use thiserror::Error;

const LIGHT: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const DARK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);

/// Pixel geometry for a rendered code.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl RenderOptions {
    /// Default QR geometry.
    pub fn qr() -> Self {
        Self {
            width: 400,
            height: 400,
            margin: 13,
        }
    }

    /// Default CODE 128 geometry.
    pub fn barcode() -> Self {
        Self {
            width: 400,
            height: 125,
            margin: 13,
        }
    }

    fn inner_width(&self) -> u32 {
        self.width.saturating_sub(2 * self.margin).max(1)
    }

    fn inner_height(&self) -> u32 {
        self.height.saturating_sub(2 * self.margin).max(1)
    }
}

/// Failures while encoding text for a symbology.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("unsupported character: '{0}' (U+{1:04X})")]
    Unsupported(char, u32),
    #[error("text does not fit the symbology: {0}")]
    Capacity(#[from] qrcode::types::QrError),
}

fn blank_canvas(options: &RenderOptions) -> RgbaImage {
    ImageBuffer::from_pixel(options.width, options.height, LIGHT)
}

#[cfg(test)]
mod tests {
    use image::GenericImageView;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn qr_canvas_matches_requested_geometry() {
        let image = render_qr("Hello World", &RenderOptions::qr()).unwrap();
        assert_eq!(image.dimensions(), (400, 400));
    }

    #[test]
    fn barcode_canvas_matches_requested_geometry() {
        let image = render_barcode("Hello World", &RenderOptions::barcode()).unwrap();
        assert_eq!(image.dimensions(), (400, 125));
    }

    #[test]
    fn rendered_codes_contain_dark_modules() {
        for image in [
            render_qr("Hello World", &RenderOptions::qr()).unwrap(),
            render_barcode("Hello World", &RenderOptions::barcode()).unwrap(),
        ] {
            let dark = image
                .to_rgba8()
                .pixels()
                .filter(|px| px.0 == [0x00, 0x00, 0x00, 0xff])
                .count();
            assert!(dark > 0);
        }
    }

    #[test]
    fn barcode_rejects_characters_outside_latin1() {
        let err = render_barcode("snow \u{2603}", &RenderOptions::barcode()).unwrap_err();
        assert!(matches!(err, EncodeError::Unsupported('\u{2603}', 0x2603)));
    }

    #[test]
    fn barcode_accepts_the_full_ascii_range() {
        let printable: String = (' '..='~').collect::<String>().chars().take(80).collect();
        assert!(render_barcode(&printable, &RenderOptions::barcode()).is_ok());
    }
}
