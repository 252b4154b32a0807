//! QR matrix generation and module painting.

use image::DynamicImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use qrcode::{Color, EcLevel, QrCode, Version};

use super::{DARK, EncodeError, RenderOptions, blank_canvas};

/// Preferred symbol version. Input that does not fit falls back to the
/// smallest version that holds it at the same error-correction level.
const VERSION_HINT: i16 = 20;

/// Encode `text` as a QR symbol and paint it centered on a blank canvas.
pub fn render_qr(text: &str, options: &RenderOptions) -> Result<DynamicImage, EncodeError> {
    let code = QrCode::with_version(text, Version::Normal(VERSION_HINT), EcLevel::L)
        .or_else(|_| QrCode::with_error_correction_level(text, EcLevel::L))?;

    let modules = code.width() as u32;
    let module_px = (options.inner_width().min(options.inner_height()) / modules).max(1);
    let symbol_px = modules * module_px;
    let offset_x = (options.width.saturating_sub(symbol_px) / 2) as i32;
    let offset_y = (options.height.saturating_sub(symbol_px) / 2) as i32;

    let mut canvas = blank_canvas(options);
    for (idx, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let col = (idx as u32 % modules) * module_px;
        let row = (idx as u32 / modules) * module_px;
        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(offset_x + col as i32, offset_y + row as i32).of_size(module_px, module_px),
            DARK,
        );
    }

    Ok(DynamicImage::ImageRgba8(canvas))
}
