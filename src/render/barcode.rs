//! CODE 128 bar layout and painting.

use code128::Code128;
use image::DynamicImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use super::{DARK, EncodeError, RenderOptions, blank_canvas};

/// Encode `text` as a CODE 128 symbol and paint it centered on a blank canvas.
pub fn render_barcode(text: &str, options: &RenderOptions) -> Result<DynamicImage, EncodeError> {
    let bytes = latin1_bytes(text)?;
    let code = Code128::encode(&bytes);

    // `len()` is the symbol width in modules, quiet zones included.
    let modules = code.len() as u32;
    let module_px = (options.inner_width() / modules.max(1)).max(1);
    let symbol_px = modules * module_px;
    let bar_height = options.inner_height();
    let offset_y = (options.height.saturating_sub(bar_height) / 2) as i32;

    let mut canvas = blank_canvas(options);
    let mut x = (options.width.saturating_sub(symbol_px) / 2) as i32;
    for bar in code.modules() {
        let bar_px = bar.width as u32 * module_px;
        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(x, offset_y).of_size(bar_px, bar_height),
            DARK,
        );
        x += ((bar.width as u32 + bar.space as u32) * module_px) as i32;
    }

    Ok(DynamicImage::ImageRgba8(canvas))
}

/// CODE 128 reaches the Latin-1 range at most; anything beyond cannot be
/// encoded and fails this symbology's attempt.
fn latin1_bytes(text: &str) -> Result<Vec<u8>, EncodeError> {
    text.chars()
        .map(|ch| {
            let cp = ch as u32;
            if cp <= 0xff {
                Ok(cp as u8)
            } else {
                Err(EncodeError::Unsupported(ch, cp))
            }
        })
        .collect()
}
