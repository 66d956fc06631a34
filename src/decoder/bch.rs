/// BCH(15,5) decoding for QR format information
use crate::encoder::format::format_word;
use crate::models::{ECLevel, MaskPattern};

/// BCH(15,5) has minimum distance 7, so up to 3 bit errors are correctable
pub const MAX_FORMAT_ERRORS: u32 = 3;

/// A raw format word matched to the nearest valid one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatMatch {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
    /// Bits that differed from the valid word
    pub distance: u32,
}

/// BCH error correction for QR code format info
pub struct BchDecoder;

impl BchDecoder {
    /// Decode a masked 15-bit format word by nearest valid codeword
    pub fn decode_format(raw: u16) -> Option<FormatMatch> {
        let mut best: Option<FormatMatch> = None;
        for ec_level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            for mask_pattern in MaskPattern::ALL {
                let distance = (format_word(ec_level, mask_pattern) ^ (raw & 0x7FFF)).count_ones();
                if best.is_none_or(|b| distance < b.distance) {
                    best = Some(FormatMatch {
                        ec_level,
                        mask_pattern,
                        distance,
                    });
                }
            }
        }
        best.filter(|b| b.distance <= MAX_FORMAT_ERRORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decode_exact() {
        let result = BchDecoder::decode_format(0x77C4).unwrap();
        assert_eq!(result.ec_level, ECLevel::L);
        assert_eq!(result.mask_pattern, MaskPattern::Pattern0);
        assert_eq!(result.distance, 0);
    }

    #[test]
    fn test_format_decode_all_words() {
        for ec_level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            for mask in MaskPattern::ALL {
                let m = BchDecoder::decode_format(format_word(ec_level, mask)).unwrap();
                assert_eq!((m.ec_level, m.mask_pattern), (ec_level, mask));
            }
        }
    }

    #[test]
    fn test_format_corrects_three_bits() {
        let word = format_word(ECLevel::L, MaskPattern::Pattern5);
        let damaged = word ^ 0b100_0000_0100_0001;
        let m = BchDecoder::decode_format(damaged).unwrap();
        assert_eq!(m.mask_pattern, MaskPattern::Pattern5);
        assert_eq!(m.distance, 3);
    }

    #[test]
    fn test_format_rejects_far_word() {
        // every valid word has at least 5 set and 5 clear bits
        assert!(BchDecoder::decode_format(0).is_none());
        assert!(BchDecoder::decode_format(0x7FFF).is_none());
        // four flipped bits is out of range
        let word = format_word(ECLevel::L, MaskPattern::Pattern2);
        assert!(BchDecoder::decode_format(word ^ 0b000_1111_0000_0000).is_none());
    }
}
