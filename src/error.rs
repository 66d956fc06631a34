use thiserror::Error;

/// Errors surfaced by generation, reading and rendering.
///
/// Only [`QrError::EmptyPayload`] and [`QrError::PayloadTooLong`] can come out of
/// generation; everything else belongs to the reader or the renderers. Broken
/// internal invariants (codeword counts, grid bounds) panic instead of showing
/// up here.
#[derive(Debug, Error)]
pub enum QrError {
    /// Nothing to encode
    #[error("payload is empty")]
    EmptyPayload,

    /// Payload does not fit a version 3-L byte-mode symbol
    #[error("payload is {len} bytes, at most {max} fit")]
    PayloadTooLong {
        /// UTF-8 length of the rejected payload
        len: usize,
        /// Largest accepted length
        max: usize,
    },

    /// Reader was handed a grid of the wrong shape
    #[error("expected a 29x29 grid, got {width}x{height}")]
    InvalidDimension {
        /// Columns in the supplied grid
        width: usize,
        /// Rows in the supplied grid
        height: usize,
    },

    /// Neither format information copy is within correction distance
    #[error("format information unreadable")]
    FormatUnreadable,

    /// Format information names a level other than L
    #[error("unsupported error correction level")]
    UnsupportedEcLevel,

    /// Too many damaged codewords for Reed-Solomon
    #[error("uncorrectable codeword errors")]
    Uncorrectable,

    /// Data does not start with the byte-mode indicator
    #[error("unsupported data mode {mode:#06b}")]
    UnsupportedMode {
        /// The 4-bit mode indicator found
        mode: u8,
    },

    /// Character count overruns the data codewords
    #[error("data segment truncated")]
    Truncated,

    /// Decoded bytes are not valid UTF-8
    #[error("payload is not valid UTF-8")]
    InvalidUtf8,

    /// PNG encoding failed
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// File output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
