use super::RenderOptions;
use crate::error::QrError;
use crate::models::QrSymbol;
use image::{ImageBuffer, Luma};
use std::fs;
use std::path::Path;

/// Grayscale image of the symbol with the configured module size and margin
pub fn to_image_buffer(symbol: &QrSymbol, options: &RenderOptions) -> ImageBuffer<Luma<u8>, Vec<u8>> {
    let module_px = options.module_px.max(1);
    let side = options.image_size(symbol.size()) as u32;
    let mut img = ImageBuffer::new(side, side);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let col = (x as usize / module_px).checked_sub(options.quiet_zone);
        let row = (y as usize / module_px).checked_sub(options.quiet_zone);
        let dark = match (row, col) {
            // QrSymbol::get treats out-of-range as light, covering the far margin
            (Some(r), Some(c)) => symbol.get(r, c),
            _ => false,
        };
        *pixel = Luma([if dark { options.dark } else { options.light }]);
    }

    img
}

/// Render and write a PNG, creating the parent directory if needed
pub fn save_png<P: AsRef<Path>>(symbol: &QrSymbol, path: P, options: &RenderOptions) -> Result<(), QrError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    to_image_buffer(symbol, options).save_with_format(path, image::ImageFormat::Png)?;
    tracing::debug!(path = %path.display(), "png written");
    Ok(())
}
