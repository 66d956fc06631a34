/// Module layout for a version 3 symbol: function patterns and zigzag data placement
use super::format::{FORMAT_CELLS_PRIMARY, FORMAT_CELLS_SECONDARY};
use crate::models::{BitMatrix, SYMBOL_SIZE, TOTAL_CODEWORDS};

/// Center of the single version 3 alignment pattern
pub const ALIGNMENT_CENTER: usize = 22;

/// Grid under construction: module values plus which cells are function modules
#[derive(Debug, Clone)]
pub struct SymbolLayout {
    modules: BitMatrix,
    function: BitMatrix,
}

impl SymbolLayout {
    /// Draw every function pattern and reserve the format strips (left light)
    pub fn new() -> Self {
        let mut layout = Self {
            modules: BitMatrix::square(SYMBOL_SIZE),
            function: BitMatrix::square(SYMBOL_SIZE),
        };

        layout.draw_finder(0, 0);
        layout.draw_finder(0, SYMBOL_SIZE - 7);
        layout.draw_finder(SYMBOL_SIZE - 7, 0);
        layout.draw_alignment(ALIGNMENT_CENTER, ALIGNMENT_CENTER);

        // Timing patterns, between the separators
        for i in 8..SYMBOL_SIZE - 8 {
            layout.set_function(6, i, i % 2 == 0);
            layout.set_function(i, 6, i % 2 == 0);
        }

        layout.set_function(SYMBOL_SIZE - 8, 8, true);

        for &(row, col) in FORMAT_CELLS_PRIMARY.iter().chain(FORMAT_CELLS_SECONDARY.iter()) {
            layout.set_function(row, col, false);
        }

        layout
    }

    fn set_function(&mut self, row: usize, col: usize, dark: bool) {
        self.modules.set(row, col, dark);
        self.function.set(row, col, true);
    }

    /// 7x7 finder with top-left corner at (row, col), plus its light separator
    fn draw_finder(&mut self, row: usize, col: usize) {
        for dy in -1i32..=7 {
            for dx in -1i32..=7 {
                let r = row as i32 + dy;
                let c = col as i32 + dx;
                if r < 0 || c < 0 || r >= SYMBOL_SIZE as i32 || c >= SYMBOL_SIZE as i32 {
                    continue;
                }
                let separator = dy == -1 || dy == 7 || dx == -1 || dx == 7;
                let ring = dy == 0 || dy == 6 || dx == 0 || dx == 6;
                let core = (2..=4).contains(&dy) && (2..=4).contains(&dx);
                self.set_function(r as usize, c as usize, !separator && (ring || core));
            }
        }
    }

    /// 5x5 alignment pattern centered at (row, col)
    fn draw_alignment(&mut self, row: usize, col: usize) {
        for dy in -2i32..=2 {
            for dx in -2i32..=2 {
                let border = dy.abs() == 2 || dx.abs() == 2;
                let center = dy == 0 && dx == 0;
                let r = (row as i32 + dy) as usize;
                let c = (col as i32 + dx) as usize;
                self.set_function(r, c, border || center);
            }
        }
    }

    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    pub fn function_map(&self) -> &BitMatrix {
        &self.function
    }

    pub fn is_function(&self, row: usize, col: usize) -> bool {
        self.function.get(row, col)
    }

    /// Non-function cells available for data
    pub fn data_capacity_bits(&self) -> usize {
        SYMBOL_SIZE * SYMBOL_SIZE - self.function.count_dark()
    }

    /// Stream codeword bits (MSB first) into the non-function cells.
    ///
    /// Column pairs are swept right to left, alternating upward and downward,
    /// with column 6 skipped entirely. Cells left over once the bits run out
    /// stay light. Returns the number of cells visited.
    pub fn place_codewords(&mut self, codewords: &[u8]) -> usize {
        assert_eq!(codewords.len(), TOTAL_CODEWORDS, "codeword count");
        let total_bits = codewords.len() * 8;
        let bit_at = |i: usize| (codewords[i / 8] >> (7 - i % 8)) & 1 != 0;

        let mut bit_idx = 0;
        let mut upward = true;
        let mut right = SYMBOL_SIZE - 1;
        loop {
            if right == 6 {
                right = 5;
            }
            for step in 0..SYMBOL_SIZE {
                let row = if upward { SYMBOL_SIZE - 1 - step } else { step };
                for col in [right, right - 1] {
                    if self.function.get(row, col) {
                        continue;
                    }
                    let dark = bit_idx < total_bits && bit_at(bit_idx);
                    self.modules.set(row, col, dark);
                    bit_idx += 1;
                }
            }
            upward = !upward;
            if right < 3 {
                break;
            }
            right -= 2;
        }

        debug_assert!(bit_idx >= total_bits, "grid too small for codewords");
        bit_idx
    }

    pub fn into_parts(self) -> (BitMatrix, BitMatrix) {
        (self.modules, self.function)
    }
}

impl Default for SymbolLayout {
    fn default() -> Self {
        Self::new()
    }
}
