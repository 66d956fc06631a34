use crate::models::{BitMatrix, Version};

/// Function module mask for a specific QR version, derived from geometry alone.
/// true = function module (not data), false = data module.
pub struct FunctionMask {
    mask: BitMatrix,
}

impl FunctionMask {
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut mask = BitMatrix::square(size);

        // Finder patterns + separators (up to 8x8 areas, clipped to bounds)
        Self::mark_finder_area(&mut mask, 0, 0);
        Self::mark_finder_area(&mut mask, 0, size - 7);
        Self::mark_finder_area(&mut mask, size - 7, 0);

        // Timing patterns (row 6 and column 6)
        for i in 0..size {
            mask.set(6, i, true);
            mask.set(i, 6, true);
        }

        // Alignment patterns
        let align = alignment_pattern_positions(version);
        for &cr in &align {
            for &cc in &align {
                // Skip the three finder corners
                let in_tl = cr <= 8 && cc <= 8;
                let in_tr = cr <= 8 && cc >= size - 9;
                let in_bl = cr >= size - 9 && cc <= 8;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                for r in cr - 2..=cr + 2 {
                    for c in cc - 2..=cc + 2 {
                        mask.set(r, c, true);
                    }
                }
            }
        }

        // Format info areas
        for i in 0..9 {
            if i != 6 {
                mask.set(8, i, true);
                mask.set(i, 8, true);
            }
        }
        for i in 0..8 {
            mask.set(size - 1 - i, 8, true);
            mask.set(8, size - 1 - i, true);
        }

        // Dark module
        mask.set(size - 8, 8, true);

        Self { mask }
    }

    pub fn size(&self) -> usize {
        self.mask.width()
    }

    pub fn is_function(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col)
    }

    pub fn data_modules_count(&self) -> usize {
        self.size() * self.size() - self.mask.count_dark()
    }

    fn mark_finder_area(mask: &mut BitMatrix, row: usize, col: usize) {
        let size = mask.width();
        let start_r = row.saturating_sub(1);
        let start_c = col.saturating_sub(1);
        let end_r = (row + 7 + 1).min(size);
        let end_c = (col + 7 + 1).min(size);
        for r in start_r..end_r {
            for c in start_c..end_c {
                mask.set(r, c, true);
            }
        }
    }
}

/// Alignment pattern centers for versions 2-6: the timing line and `size - 7`.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    match version.number() {
        2..=6 => vec![6, version.size() - 7],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_positions_v3() {
        assert_eq!(alignment_pattern_positions(Version::V3), vec![6, 22]);
    }

    #[test]
    fn test_data_module_count_v3() {
        let func = FunctionMask::new(Version::V3);
        assert_eq!(func.size(), 29);
        assert_eq!(func.data_modules_count(), 567);
    }

    #[test]
    fn test_function_regions_v3() {
        let func = FunctionMask::new(Version::V3);
        assert!(func.is_function(0, 0));
        assert!(func.is_function(7, 21));
        assert!(func.is_function(22, 22));
        assert!(func.is_function(6, 15));
        assert!(func.is_function(21, 8));
        assert!(!func.is_function(9, 9));
        assert!(!func.is_function(28, 28));
        // alignment is not drawn over the finders
        assert!(!func.is_function(5, 20));
    }
}
