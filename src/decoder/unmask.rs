/// Unmask QR code by applying the mask pattern
use crate::decoder::function_mask::FunctionMask;
use crate::models::{BitMatrix, MaskPattern};

/// Unmask QR code matrix by XORing data modules with the mask pattern
pub fn unmask(matrix: &mut BitMatrix, mask_pattern: MaskPattern, func: &FunctionMask) {
    for row in 0..matrix.height() {
        for col in 0..matrix.width() {
            if !func.is_function(row, col) && mask_pattern.is_masked(row, col) {
                matrix.toggle(row, col);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    #[test]
    fn test_unmask() {
        let mut matrix = BitMatrix::square(29);

        // data module locations
        matrix.set(10, 10, true);
        matrix.set(10, 11, false);
        matrix.set(11, 10, true);

        let func = FunctionMask::new(Version::V3);
        unmask(&mut matrix, MaskPattern::Pattern0, &func);

        // Pattern0: (row + col) % 2 == 0
        assert!(!matrix.get(10, 10));
        assert!(!matrix.get(10, 11));
        assert!(matrix.get(11, 10));
        // finder untouched
        assert!(!matrix.get(0, 0));
    }
}
