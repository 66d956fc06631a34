//! QR code reading modules
//!
//! Reads a module grid back to its payload, independently of the encoder's
//! layout code. Used to verify generated symbols:
//! - Format extraction with BCH correction
//! - Unmasking and zigzag bitstream extraction
//! - Reed-Solomon error correction
//! - Byte mode decoding

/// BCH error correction for format info
pub mod bch;
/// Bitstream extraction from QR matrix
pub mod bitstream;
/// Format information extraction (mask pattern, EC level)
pub mod format;
/// Function module mask builder (finder/timing/format/alignment)
pub mod function_mask;
/// Byte mode segment parsing
pub mod payload;
/// Main QR decoder that orchestrates the reading pipeline
pub mod qr_decoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// QR code unmasking (removes mask patterns)
pub mod unmask;
