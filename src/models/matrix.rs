/// Compact bit matrix for storing module grids (true = dark)
///
/// Modules are addressed as `(row, col)` and packed row-major, eight per byte.
/// Out-of-range reads return `false` and out-of-range writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new all-light matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Create a square all-light matrix
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Build a matrix from row slices. Rows shorter than the first are padded light.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut matrix = Self::new(width, height);
        for (row, cells) in rows.iter().enumerate() {
            for (col, &dark) in cells.as_ref().iter().enumerate().take(width) {
                matrix.set(row, col, dark);
            }
        }
        matrix
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, row: usize, col: usize) -> Option<(usize, u8)> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let index = row * self.width + col;
        Some((index / 8, 1 << (index % 8)))
    }

    /// Get module at (row, col)
    pub fn get(&self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some((byte, bit)) => self.data[byte] & bit != 0,
            None => false,
        }
    }

    /// Set module at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if let Some((byte, bit)) = self.index(row, col) {
            if value {
                self.data[byte] |= bit;
            } else {
                self.data[byte] &= !bit;
            }
        }
    }

    /// Toggle module at (row, col)
    pub fn toggle(&mut self, row: usize, col: usize) {
        if let Some((byte, bit)) = self.index(row, col) {
            self.data[byte] ^= bit;
        }
    }

    /// Number of dark modules
    pub fn count_dark(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.height)
            .map(|row| (0..self.width).map(|col| self.get(row, col)).collect())
            .collect()
    }

    /// Clear all modules to light
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Get raw data as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_matrix() {
        let mut matrix = BitMatrix::new(8, 8);
        assert_eq!(matrix.width(), 8);
        assert_eq!(matrix.height(), 8);

        matrix.set(3, 4, true);
        assert!(matrix.get(3, 4));
        assert!(!matrix.get(4, 3));

        matrix.toggle(3, 4);
        assert!(!matrix.get(3, 4));

        matrix.set(0, 0, true);
        matrix.clear();
        assert_eq!(matrix.count_dark(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = BitMatrix::new(8, 8);
        matrix.set(10, 10, true); // Should not panic
        matrix.toggle(8, 0);
        assert!(!matrix.get(10, 10));
        assert_eq!(matrix.count_dark(), 0);
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![vec![true, false, true], vec![false, false, true]];
        let matrix = BitMatrix::from_rows(&rows);
        assert_eq!(matrix.width(), 3);
        assert_eq!(matrix.height(), 2);
        assert_eq!(matrix.count_dark(), 3);
        assert_eq!(matrix.to_rows(), rows);
    }

    #[test]
    fn test_odd_size_packing() {
        // 29x29 = 841 modules, not a multiple of 8
        let mut matrix = BitMatrix::square(29);
        assert_eq!(matrix.as_bytes().len(), 106);
        matrix.set(28, 28, true);
        assert!(matrix.get(28, 28));
        assert_eq!(matrix.count_dark(), 1);
    }
}
