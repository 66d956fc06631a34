/// Format information: BCH(15,5) protected EC level and mask id
use crate::models::{BitMatrix, ECLevel, MaskPattern, SYMBOL_SIZE};

/// x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u16 = 0x537;
/// XOR applied so no valid format word is all zeros
pub const FORMAT_MASK: u16 = 0x5412;

/// Cells of the copy around the top-left finder, bit 0 first
pub const FORMAT_CELLS_PRIMARY: [(usize, usize); 15] = [
    (0, 8),
    (1, 8),
    (2, 8),
    (3, 8),
    (4, 8),
    (5, 8),
    (7, 8),
    (8, 8),
    (8, 7),
    (8, 5),
    (8, 4),
    (8, 3),
    (8, 2),
    (8, 1),
    (8, 0),
];

/// Cells of the copy split between the top-right and bottom-left finders, bit 0 first
pub const FORMAT_CELLS_SECONDARY: [(usize, usize); 15] = [
    (8, SYMBOL_SIZE - 1),
    (8, SYMBOL_SIZE - 2),
    (8, SYMBOL_SIZE - 3),
    (8, SYMBOL_SIZE - 4),
    (8, SYMBOL_SIZE - 5),
    (8, SYMBOL_SIZE - 6),
    (8, SYMBOL_SIZE - 7),
    (8, SYMBOL_SIZE - 8),
    (SYMBOL_SIZE - 7, 8),
    (SYMBOL_SIZE - 6, 8),
    (SYMBOL_SIZE - 5, 8),
    (SYMBOL_SIZE - 4, 8),
    (SYMBOL_SIZE - 3, 8),
    (SYMBOL_SIZE - 2, 8),
    (SYMBOL_SIZE - 1, 8),
];

/// 10-bit BCH remainder of the 5 data bits
pub fn bch_remainder(data5: u8) -> u16 {
    let mut register = (data5 as u16 & 0x1F) << 10;
    for i in (10..15).rev() {
        if (register >> i) & 1 != 0 {
            register ^= FORMAT_GENERATOR << (i - 10);
        }
    }
    register & 0x3FF
}

/// Full 15-bit format word for an EC level and mask
pub fn format_word(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data5 = (ec_level.format_bits() << 3) | mask.id();
    (((data5 as u16) << 10) | bch_remainder(data5)) ^ FORMAT_MASK
}

/// Write both copies of the format word, LSB first along each cell list
pub fn draw_format_bits(modules: &mut BitMatrix, word: u16) {
    for i in 0..15 {
        let bit = (word >> i) & 1 != 0;
        let (r1, c1) = FORMAT_CELLS_PRIMARY[i];
        let (r2, c2) = FORMAT_CELLS_SECONDARY[i];
        modules.set(r1, c1, bit);
        modules.set(r2, c2, bit);
    }
}
