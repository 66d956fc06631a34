//! Rendering of finished symbols
//!
//! These sit outside the generator: they only read a [`QrSymbol`](crate::QrSymbol)
//! and draw it with a light quiet zone around it.

/// Raster output via the `image` crate
pub mod raster;
/// SVG output
pub mod svg;
/// Terminal text output
pub mod text;

use crate::config;

/// Raster rendering parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module edge
    pub module_px: usize,
    /// Light margin on every side, in modules
    pub quiet_zone: usize,
    /// Luma value of dark modules
    pub dark: u8,
    /// Luma value of light modules and the quiet zone
    pub light: u8,
}

impl RenderOptions {
    /// Pixels per module, at least 1
    pub fn with_module_px(mut self, module_px: usize) -> Self {
        self.module_px = module_px.max(1);
        self
    }

    /// Quiet zone width in modules
    pub fn with_quiet_zone(mut self, quiet_zone: usize) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Output edge length in pixels for a symbol of `size` modules
    pub fn image_size(&self, size: usize) -> usize {
        (size + 2 * self.quiet_zone) * self.module_px
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_px: config::module_px(),
            quiet_zone: config::quiet_zone(),
            dark: 0,
            light: 255,
        }
    }
}
