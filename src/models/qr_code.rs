use super::BitMatrix;

/// Side length of a version 3 symbol in modules
pub const SYMBOL_SIZE: usize = 29;
/// Data codewords in a version 3-L symbol
pub const DATA_CODEWORDS: usize = 55;
/// Error correction codewords in a version 3-L symbol (single block)
pub const ECC_CODEWORDS: usize = 15;
/// All codewords placed in the symbol
pub const TOTAL_CODEWORDS: usize = DATA_CODEWORDS + ECC_CODEWORDS;
/// Largest byte-mode payload that fits: 440 bits minus 12 bits of header
pub const MAX_PAYLOAD_BYTES: usize = 53;

/// QR code version (Model 2). Only version 3 is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version(u8);

impl Version {
    /// The one version this crate generates and reads
    pub const V3: Version = Version(3);

    /// Version for a symbol side length, if it is a valid Model 2 size
    pub fn from_size(size: usize) -> Option<Self> {
        if size < 21 || size > 177 || (size - 17) % 4 != 0 {
            return None;
        }
        Some(Version(((size - 17) / 4) as u8))
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// Two-bit code stored in format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Get error correction level from its format-information code
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaskPattern {
    /// (row + col) % 2 == 0
    Pattern0 = 0,
    /// row % 2 == 0
    Pattern1 = 1,
    /// col % 3 == 0
    Pattern2 = 2,
    /// (row + col) % 3 == 0
    Pattern3 = 3,
    /// (row/2 + col/3) % 2 == 0
    Pattern4 = 4,
    /// (row*col)%2 + (row*col)%3 == 0
    Pattern5 = 5,
    /// ((row*col)%2 + (row*col)%3) % 2 == 0
    Pattern6 = 6,
    /// ((row+col)%2 + (row*col)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All patterns in id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit id
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0x07) as usize]
    }

    /// The 3-bit id stored in format information
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if module at (row, col) is inverted by this mask
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (row + col) % 2 == 0,
            MaskPattern::Pattern1 => row % 2 == 0,
            MaskPattern::Pattern2 => col % 3 == 0,
            MaskPattern::Pattern3 => (row + col) % 3 == 0,
            MaskPattern::Pattern4 => (row / 2 + col / 3) % 2 == 0,
            MaskPattern::Pattern5 => (row * col) % 2 + (row * col) % 3 == 0,
            MaskPattern::Pattern6 => ((row * col) % 2 + (row * col) % 3) % 2 == 0,
            MaskPattern::Pattern7 => ((row + col) % 2 + (row * col) % 3) % 2 == 0,
        }
    }
}

/// A finished version 3-L symbol. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    modules: BitMatrix,
    mask_pattern: MaskPattern,
    penalty: u32,
}

impl QrSymbol {
    pub(crate) fn new(modules: BitMatrix, mask_pattern: MaskPattern, penalty: u32) -> Self {
        debug_assert_eq!(modules.width(), SYMBOL_SIZE);
        debug_assert_eq!(modules.height(), SYMBOL_SIZE);
        Self {
            modules,
            mask_pattern,
            penalty,
        }
    }

    /// Side length in modules (always 29)
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Whether the module at (row, col) is dark. Out-of-range reads are light,
    /// which lets renderers draw the quiet zone without bounds checks.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.modules.get(row, col)
    }

    /// Underlying module grid
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// The grid as nested rows (true = dark)
    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.modules.to_rows()
    }

    /// Mask chosen by the penalty selector
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Always [`ECLevel::L`]
    pub fn ec_level(&self) -> ECLevel {
        ECLevel::L
    }

    /// Always [`Version::V3`]
    pub fn version(&self) -> Version {
        Version::V3
    }

    /// Penalty score of the chosen mask
    pub fn penalty(&self) -> u32 {
        self.penalty
    }
}

/// Result of reading a symbol back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSymbol {
    /// Raw decoded bytes
    pub data: Vec<u8>,
    /// Decoded content as UTF-8 string
    pub content: String,
    /// Error correction level from format information
    pub ec_level: ECLevel,
    /// Mask pattern from format information
    pub mask_pattern: MaskPattern,
    /// Codewords repaired by Reed-Solomon
    pub corrected_errors: usize,
}
