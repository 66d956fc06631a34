/// Mask application and penalty scoring
use crate::models::{BitMatrix, MaskPattern};

const RUN_MIN: usize = 5;
const RUN_BASE: u32 = 3;
const BLOCK_PENALTY: u32 = 3;
const BALANCE_STEP: u32 = 10;

/// One fully drawn grid for a given mask, with its penalty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskCandidate {
    pub mask: MaskPattern,
    pub modules: BitMatrix,
    pub penalty: u32,
}

/// Copy `base`, inverting every non-function module the mask selects
pub fn apply_mask(base: &BitMatrix, function: &BitMatrix, mask: MaskPattern) -> BitMatrix {
    let mut out = base.clone();
    for row in 0..base.height() {
        for col in 0..base.width() {
            if !function.get(row, col) && mask.is_masked(row, col) {
                out.toggle(row, col);
            }
        }
    }
    out
}

fn run_score(len: usize) -> u32 {
    if len >= RUN_MIN {
        RUN_BASE + (len - RUN_MIN) as u32
    } else {
        0
    }
}

fn line_run_penalty(cells: impl Iterator<Item = bool>) -> u32 {
    let mut penalty = 0;
    let mut run_color = None;
    let mut run_len = 0;
    for dark in cells {
        if Some(dark) == run_color {
            run_len += 1;
        } else {
            penalty += run_score(run_len);
            run_color = Some(dark);
            run_len = 1;
        }
    }
    penalty + run_score(run_len)
}

/// 3 + (n - 5) for every maximal same-color run of n >= 5, in rows and columns
pub fn run_penalty(modules: &BitMatrix) -> u32 {
    let (w, h) = (modules.width(), modules.height());
    let rows: u32 = (0..h)
        .map(|r| line_run_penalty((0..w).map(|c| modules.get(r, c))))
        .sum();
    let cols: u32 = (0..w)
        .map(|c| line_run_penalty((0..h).map(|r| modules.get(r, c))))
        .sum();
    rows + cols
}

/// 3 for every 2x2 same-color block, overlapping blocks counted separately
pub fn block_penalty(modules: &BitMatrix) -> u32 {
    let mut penalty = 0;
    for row in 0..modules.height().saturating_sub(1) {
        for col in 0..modules.width().saturating_sub(1) {
            let v = modules.get(row, col);
            if v == modules.get(row, col + 1)
                && v == modules.get(row + 1, col)
                && v == modules.get(row + 1, col + 1)
            {
                penalty += BLOCK_PENALTY;
            }
        }
    }
    penalty
}

/// 10 for every full 5% step the dark ratio sits away from 50%
pub fn balance_penalty(modules: &BitMatrix) -> u32 {
    let total = modules.width() * modules.height();
    if total == 0 {
        return 0;
    }
    // floor(|100*dark/total - 50| / 5) == floor(|20*dark - 10*total| / total)
    let dark = modules.count_dark() as i64;
    let total = total as i64;
    let steps = (20 * dark - 10 * total).abs() / total;
    steps as u32 * BALANCE_STEP
}

/// Total penalty. The finder-like pattern rule is deliberately not scored.
pub fn penalty_score(modules: &BitMatrix) -> u32 {
    run_penalty(modules) + block_penalty(modules) + balance_penalty(modules)
}

/// Index of the lowest penalty; the first one wins a tie
pub fn select_best(candidates: &[MaskCandidate]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        match best {
            Some(b) if candidates[b].penalty <= candidate.penalty => {}
            _ => best = Some(i),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(size: usize) -> BitMatrix {
        let mut m = BitMatrix::square(size);
        for r in 0..size {
            for c in 0..size {
                m.set(r, c, (r + c) % 2 == 0);
            }
        }
        m
    }

    #[test]
    fn test_run_penalty_single_line() {
        let line = |bits: &[u8]| line_run_penalty(bits.iter().map(|&b| b == 1));
        assert_eq!(line(&[1, 1, 1, 1]), 0);
        assert_eq!(line(&[1, 1, 1, 1, 1]), 3);
        assert_eq!(line(&[0, 1, 1, 1, 1, 1, 1, 1, 0]), 5);
        assert_eq!(line(&[0, 0, 0, 0, 0, 1, 1, 1, 1, 1]), 6);
    }

    #[test]
    fn test_all_light_grid() {
        let m = BitMatrix::square(29);
        // each of 58 lines is one run of 29 -> 3 + 24
        assert_eq!(run_penalty(&m), 58 * 27);
        assert_eq!(block_penalty(&m), 28 * 28 * 3);
        assert_eq!(balance_penalty(&m), 100);
        assert_eq!(
            penalty_score(&m),
            58 * 27 + 28 * 28 * 3 + 100
        );
    }

    #[test]
    fn test_checkerboard_scores_zero() {
        let m = checkerboard(29);
        assert_eq!(run_penalty(&m), 0);
        assert_eq!(block_penalty(&m), 0);
        // 421 of 841 dark -> 50.06%
        assert_eq!(balance_penalty(&m), 0);
    }

    #[test]
    fn test_balance_steps() {
        // 10x10 grid, 100 modules: dark% == dark count
        let mut m = BitMatrix::square(10);
        let fill = |m: &mut BitMatrix, n: usize| {
            m.clear();
            for i in 0..n {
                m.set(i / 10, i % 10, true);
            }
        };
        fill(&mut m, 50);
        assert_eq!(balance_penalty(&m), 0);
        fill(&mut m, 54);
        assert_eq!(balance_penalty(&m), 0);
        fill(&mut m, 55);
        assert_eq!(balance_penalty(&m), 10);
        fill(&mut m, 39);
        assert_eq!(balance_penalty(&m), 20);
        fill(&mut m, 100);
        assert_eq!(balance_penalty(&m), 100);
    }

    #[test]
    fn test_apply_mask_skips_function_modules() {
        let base = BitMatrix::square(6);
        let mut function = BitMatrix::square(6);
        function.set(0, 0, true);
        let masked = apply_mask(&base, &function, MaskPattern::Pattern1);
        assert!(!masked.get(0, 0));
        assert!(masked.get(0, 1));
        assert!(!masked.get(1, 1));
        assert!(masked.get(2, 5));
        // applying twice restores the base
        assert_eq!(apply_mask(&masked, &function, MaskPattern::Pattern1), base);
    }

    #[test]
    fn test_select_best_prefers_first_on_tie() {
        let cand = |id: u8, penalty: u32| MaskCandidate {
            mask: MaskPattern::from_bits(id),
            modules: BitMatrix::square(1),
            penalty,
        };
        let candidates = vec![cand(0, 40), cand(1, 30), cand(2, 30), cand(3, 50)];
        assert_eq!(select_best(&candidates), Some(1));
        assert_eq!(select_best(&[]), None);
    }
}
