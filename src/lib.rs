//! bazar_qr - deterministic QR code generator for short links
//!
//! Produces a version 3 (29x29), error correction level L, byte-mode symbol
//! from up to 53 bytes of UTF-8 text. Every call is pure: field tables and
//! grids are built fresh, nothing global is mutated, so generation can run
//! from any number of threads at once.
//!
//! ```
//! let symbol = bazar_qr::generate_symbol("https://forms.gle/n2jsDC3xkXYszFY58").unwrap();
//! assert_eq!(symbol.size(), 29);
//!
//! let decoded = bazar_qr::read_symbol(symbol.modules()).unwrap();
//! assert_eq!(decoded.content, "https://forms.gle/n2jsDC3xkXYszFY58");
//!
//! assert!(bazar_qr::generate_symbol("").is_none());
//! ```

#![warn(missing_docs)]

/// Env-driven rendering defaults
pub mod config;
/// QR code reading modules (format, unmasking, Reed-Solomon, byte mode)
#[allow(missing_docs)]
pub mod decoder;
/// QR code generation modules (GF(256), Reed-Solomon, layout, masking)
#[allow(missing_docs)]
pub mod encoder;
mod error;
/// Core data structures (BitMatrix, QrSymbol, MaskPattern, etc.)
#[allow(missing_docs)]
pub mod models;
/// SVG, raster and text rendering
pub mod render;

pub use decoder::qr_decoder::QrDecoder;
pub use encoder::mask::MaskCandidate;
pub use encoder::qr_encoder::QrEncoder;
pub use error::QrError;
pub use models::{BitMatrix, DecodedSymbol, ECLevel, MAX_PAYLOAD_BYTES, MaskPattern, QrSymbol, Version};
pub use render::RenderOptions;

use rayon::prelude::*;

/// Generate a symbol for `text`
///
/// # Returns
/// `None` when the UTF-8 length of `text` is 0 or more than 53 bytes
pub fn generate_symbol(text: &str) -> Option<QrSymbol> {
    match QrEncoder::encode(text) {
        Ok(symbol) => Some(symbol),
        Err(err) => {
            tracing::debug!(len = text.len(), %err, "no symbol");
            None
        }
    }
}

/// Generate a symbol for `text`, reporting why it was rejected
pub fn try_generate_symbol(text: &str) -> Result<QrSymbol, QrError> {
    QrEncoder::encode(text)
}

/// Generate symbols for many payloads in parallel. Output order matches input.
pub fn generate_batch<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<Option<QrSymbol>> {
    texts
        .par_iter()
        .map(|text| generate_symbol(text.as_ref()))
        .collect()
}

/// Read a 29x29 module grid back to its payload
pub fn read_symbol(modules: &BitMatrix) -> Result<DecodedSymbol, QrError> {
    QrDecoder::decode(modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_empty() {
        assert!(generate_symbol("").is_none());
        assert!(matches!(
            try_generate_symbol(""),
            Err(QrError::EmptyPayload)
        ));
    }

    #[test]
    fn test_generate_length_limit() {
        let max = "x".repeat(MAX_PAYLOAD_BYTES);
        assert!(generate_symbol(&max).is_some());
        let over = "x".repeat(MAX_PAYLOAD_BYTES + 1);
        assert!(generate_symbol(&over).is_none());
    }

    #[test]
    fn test_limit_counts_utf8_bytes() {
        // 27 two-byte characters = 54 bytes
        let text = "é".repeat(27);
        assert_eq!(text.chars().count(), 27);
        assert!(matches!(
            try_generate_symbol(&text),
            Err(QrError::PayloadTooLong { len: 54, .. })
        ));
        let text = "é".repeat(26);
        assert!(generate_symbol(&text).is_some());
    }

    #[test]
    fn test_batch_preserves_order() {
        let long = "y".repeat(60);
        let inputs = ["one", "", "three", long.as_str()];
        let results = generate_batch(&inputs);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0], generate_symbol("one"));
        assert!(results[1].is_none());
        assert_eq!(results[2], generate_symbol("three"));
        assert!(results[3].is_none());
    }

    #[test]
    fn test_read_back() {
        let symbol = generate_symbol("read me").unwrap();
        let decoded = read_symbol(symbol.modules()).unwrap();
        assert_eq!(decoded.content, "read me");
        assert_eq!(decoded.ec_level, ECLevel::L);
        assert_eq!(decoded.mask_pattern, symbol.mask_pattern());
    }
}
