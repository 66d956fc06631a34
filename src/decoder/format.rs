/// Format information extraction from QR code
use crate::decoder::bch::BchDecoder;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

/// Format info is 15 bits (5 data + 10 ECC), stored twice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
    /// Bit errors corrected in the copy that was used
    pub bit_errors: u32,
}

impl FormatInfo {
    /// Extract format info, using whichever copy is closer to a valid word
    pub fn extract(matrix: &BitMatrix) -> Option<Self> {
        if matrix.width() < 21 || matrix.width() != matrix.height() {
            return None;
        }

        let primary = BchDecoder::decode_format(Self::read_top_left(matrix));
        let secondary = BchDecoder::decode_format(Self::read_split(matrix));
        tracing::trace!(?primary, ?secondary, "format copies read");

        let best = match (primary, secondary) {
            (Some(a), Some(b)) => Some(if b.distance < a.distance { b } else { a }),
            (a, b) => a.or(b),
        }?;

        Some(Self {
            ec_level: best.ec_level,
            mask_pattern: best.mask_pattern,
            bit_errors: best.distance,
        })
    }

    /// Copy around the top-left finder, read MSB first:
    /// row 8 left to right, then column 8 bottom to top, skipping timing
    pub fn read_top_left(matrix: &BitMatrix) -> u16 {
        let mut bits: u16 = 0;
        for col in (0..=8).filter(|&c| c != 6) {
            bits = (bits << 1) | matrix.get(8, col) as u16;
        }
        for row in (0..8).rev().filter(|&r| r != 6) {
            bits = (bits << 1) | matrix.get(row, 8) as u16;
        }
        bits
    }

    /// Copy split across the other two finders, read MSB first:
    /// column 8 bottom up (7 bits), then row 8 from size-8 to the right edge
    pub fn read_split(matrix: &BitMatrix) -> u16 {
        let size = matrix.width();
        let mut bits: u16 = 0;
        for row in (size - 7..size).rev() {
            bits = (bits << 1) | matrix.get(row, 8) as u16;
        }
        for col in size - 8..size {
            bits = (bits << 1) | matrix.get(8, col) as u16;
        }
        bits
    }
}
