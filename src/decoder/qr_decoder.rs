/// Symbol reader - wires the decoding steps together
use crate::decoder::bitstream::BitstreamExtractor;
use crate::decoder::format::FormatInfo;
use crate::decoder::function_mask::FunctionMask;
use crate::decoder::payload::decode_payload;
use crate::decoder::reed_solomon::ReedSolomonDecoder;
use crate::decoder::unmask::unmask;
use crate::error::QrError;
use crate::models::{
    BitMatrix, DATA_CODEWORDS, DecodedSymbol, ECC_CODEWORDS, ECLevel, TOTAL_CODEWORDS, Version,
};

/// Reads a sampled module grid back to its payload
pub struct QrDecoder;

impl QrDecoder {
    /// Decode a 29x29 module grid (true = dark)
    pub fn decode(matrix: &BitMatrix) -> Result<DecodedSymbol, QrError> {
        let version = Version::from_size(matrix.width())
            .filter(|v| *v == Version::V3 && matrix.height() == matrix.width())
            .ok_or(QrError::InvalidDimension {
                width: matrix.width(),
                height: matrix.height(),
            })?;

        let format_info = FormatInfo::extract(matrix).ok_or(QrError::FormatUnreadable)?;
        if format_info.ec_level != ECLevel::L {
            return Err(QrError::UnsupportedEcLevel);
        }

        let func = FunctionMask::new(version);
        let mut unmasked = matrix.clone();
        unmask(&mut unmasked, format_info.mask_pattern, &func);

        let bits = BitstreamExtractor::extract(&unmasked, &func);
        let mut codewords = BitstreamExtractor::to_codewords(&bits);
        codewords.truncate(TOTAL_CODEWORDS);
        assert_eq!(codewords.len(), TOTAL_CODEWORDS, "version 3 holds 70 codewords");

        let corrected_errors = ReedSolomonDecoder::new(ECC_CODEWORDS)
            .decode(&mut codewords)
            .map_err(|reason| {
                tracing::debug!(reason, "reed-solomon decode failed");
                QrError::Uncorrectable
            })?;

        let (data, content) = decode_payload(&codewords[..DATA_CODEWORDS])?;

        tracing::debug!(
            mask = format_info.mask_pattern.id(),
            format_bit_errors = format_info.bit_errors,
            corrected_errors,
            len = data.len(),
            "symbol decoded"
        );

        Ok(DecodedSymbol {
            data,
            content,
            ec_level: format_info.ec_level,
            mask_pattern: format_info.mask_pattern,
            corrected_errors,
        })
    }
}
