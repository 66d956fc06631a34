/// Bitstream extraction from QR code matrix
use crate::decoder::function_mask::FunctionMask;
use crate::models::BitMatrix;

/// Extract raw bitstream from QR code matrix following zigzag pattern
pub struct BitstreamExtractor;

impl BitstreamExtractor {
    /// Extract data bits from matrix (excluding function patterns)
    pub fn extract(matrix: &BitMatrix, func: &FunctionMask) -> Vec<bool> {
        let dimension = func.size();
        let mut bits = Vec::with_capacity(func.data_modules_count());

        let mut upward = true;
        let mut col = dimension as i32 - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
            }

            for step in 0..dimension {
                let row = if upward { dimension - 1 - step } else { step };
                for c in [col as usize, col as usize - 1] {
                    if !func.is_function(row, c) {
                        bits.push(matrix.get(row, c));
                    }
                }
            }

            upward = !upward;
            col -= 2;
        }

        bits
    }

    /// Group bits into MSB-first codewords, dropping a trailing partial byte
    pub fn to_codewords(bits: &[bool]) -> Vec<u8> {
        bits.chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
            .collect()
    }
}
