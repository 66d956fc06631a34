/// Text to symbol pipeline
use super::bitstream::encode_data_codewords;
use super::format::{draw_format_bits, format_word};
use super::layout::SymbolLayout;
use super::mask::{MaskCandidate, apply_mask, penalty_score, select_best};
use super::reed_solomon::ReedSolomonEncoder;
use crate::error::QrError;
use crate::models::{
    BitMatrix, ECC_CODEWORDS, ECLevel, MaskPattern, QrSymbol, TOTAL_CODEWORDS,
};

/// Version 3-L byte-mode encoder.
///
/// Stateless: every call builds its own field tables and grids, so one
/// encoder can be shared freely across threads.
pub struct QrEncoder;

impl QrEncoder {
    /// Encode UTF-8 text into a finished symbol
    pub fn encode(text: &str) -> Result<QrSymbol, QrError> {
        Self::encode_bytes(text.as_bytes())
    }

    /// Encode raw bytes into a finished symbol
    pub fn encode_bytes(payload: &[u8]) -> Result<QrSymbol, QrError> {
        let mut candidates = Self::candidates(payload)?;
        let Some(best) = select_best(&candidates) else {
            unreachable!("no mask candidates scored");
        };
        let winner = candidates.swap_remove(best);

        tracing::debug!(
            payload_len = payload.len(),
            mask = winner.mask.id(),
            penalty = winner.penalty,
            "symbol generated"
        );

        Ok(QrSymbol::new(winner.modules, winner.mask, winner.penalty))
    }

    /// All 70 codewords: 55 data followed by 15 ECC
    pub fn codewords(payload: &[u8]) -> Result<Vec<u8>, QrError> {
        let mut codewords = encode_data_codewords(payload)?;
        let ecc = ReedSolomonEncoder::new(ECC_CODEWORDS).encode(&codewords);
        codewords.extend(ecc);
        assert_eq!(codewords.len(), TOTAL_CODEWORDS);
        Ok(codewords)
    }

    /// Unmasked grid with function patterns and data placed, plus its function map
    pub fn unmasked_layout(payload: &[u8]) -> Result<(BitMatrix, BitMatrix), QrError> {
        let codewords = Self::codewords(payload)?;
        let mut layout = SymbolLayout::new();
        layout.place_codewords(&codewords);
        Ok(layout.into_parts())
    }

    /// Every mask applied and scored, in mask id order
    pub fn candidates(payload: &[u8]) -> Result<Vec<MaskCandidate>, QrError> {
        let (base, function) = Self::unmasked_layout(payload)?;

        let candidates: Vec<MaskCandidate> = MaskPattern::ALL
            .iter()
            .map(|&mask| {
                let mut modules = apply_mask(&base, &function, mask);
                draw_format_bits(&mut modules, format_word(ECLevel::L, mask));
                let penalty = penalty_score(&modules);
                tracing::trace!(mask = mask.id(), penalty, "mask candidate scored");
                MaskCandidate {
                    mask,
                    modules,
                    penalty,
                }
            })
            .collect();

        assert_eq!(candidates.len(), MaskPattern::ALL.len());
        Ok(candidates)
    }
}
