//! QR code encoding modules
//!
//! This module contains the generation pipeline for version 3-L symbols:
//! - Finite field arithmetic and Reed-Solomon ECC
//! - Byte-mode data codeword construction
//! - Function pattern layout and zigzag data placement
//! - Mask scoring and selection, format information

/// Byte-mode bit stream and data codewords
pub mod bitstream;
/// Format information (BCH(15,5)) encoding and placement
pub mod format;
/// GF(256) arithmetic with per-instance tables
pub mod gf256;
/// Function patterns and data placement
pub mod layout;
/// Mask application and penalty scoring
pub mod mask;
/// Encoder that orchestrates the pipeline
pub mod qr_encoder;
/// Reed-Solomon ECC generation
pub mod reed_solomon;
