pub mod matrix;
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{
    DATA_CODEWORDS, DecodedSymbol, ECC_CODEWORDS, ECLevel, MAX_PAYLOAD_BYTES, MaskPattern,
    QrSymbol, SYMBOL_SIZE, TOTAL_CODEWORDS, Version,
};
