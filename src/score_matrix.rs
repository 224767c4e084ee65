use std::cmp;
use std::fmt;

use ndarray::Array2;

use crate::complementarity::is_complementary;
use crate::config::FillStrategy;
use crate::sequence::Base;

/// Maximum pair counts for every window `i..=j` of a sequence.
///
/// Windows with `j - i <= min_loop_length` are too short to hold a pair and
/// always score 0, as do empty windows (`i > j`). Other entries are `None`
/// until the fill pass computes them. The public API is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    dp: Array2<Option<u32>>,
    min_loop_length: usize,
}

impl ScoreMatrix {
    fn new(n: usize, min_loop_length: usize) -> Self {
        Self {
            dp: Array2::from_elem((n, n), None),
            min_loop_length,
        }
    }

    /// Fills the matrix for `sequence` with the Nussinov recurrence.
    pub fn build(sequence: &[Base], min_loop_length: usize, strategy: FillStrategy) -> Self {
        let mut matrix = Self::new(sequence.len(), min_loop_length);
        match strategy {
            FillStrategy::BottomUp => matrix.fill_bottom_up(sequence),
            FillStrategy::Memoized => matrix.fill_memoized(sequence),
        }
        matrix
    }

    pub fn len(&self) -> usize {
        self.dp.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn min_loop_length(&self) -> usize {
        self.min_loop_length
    }

    fn is_trivial(&self, i: usize, j: usize) -> bool {
        i > j || j - i <= self.min_loop_length
    }

    /// Score of window `i..=j`, or `None` if the window was never computed.
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        if self.is_trivial(i, j) {
            Some(0)
        } else {
            self.dp[[i, j]]
        }
    }

    pub fn is_computed(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_some()
    }

    /// Score of window `i..=j`.
    ///
    /// # Panics
    ///
    /// If the window was never computed. Reading an unset entry means the
    /// matrix was not filled for the window being asked about.
    pub fn score(&self, i: usize, j: usize) -> u32 {
        match self.get(i, j) {
            Some(score) => score,
            None => panic!("score matrix entry ({}, {}) was never computed", i, j),
        }
    }

    // score of `i..t`, where `t` is the 5' partner of a pair closing at the
    // right end of the window; empty when t == i
    pub(crate) fn score_before(&self, i: usize, t: usize) -> u32 {
        if t <= i {
            0
        } else {
            self.score(i, t - 1)
        }
    }

    /// Maximum number of pairs over the whole sequence.
    pub fn total_score(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.score(0, self.len() - 1)
        }
    }

    // Evaluates the recurrence for a non-trivial window whose dependencies
    // are all computed.
    fn best(&self, sequence: &[Base], i: usize, j: usize) -> u32 {
        let mut max_val = self.score(i, j - 1);

        for t in i..(j - self.min_loop_length) {
            if is_complementary(sequence[t], sequence[j]) {
                let paired = 1 + self.score_before(i, t) + self.score(t + 1, j - 1);
                max_val = cmp::max(max_val, paired);
            }
        }

        max_val
    }

    fn fill_bottom_up(&mut self, sequence: &[Base]) {
        let n = sequence.len();

        for len in (self.min_loop_length + 1)..n {
            for i in 0..(n - len) {
                let j = i + len;
                self.dp[[i, j]] = Some(self.best(sequence, i, j));
            }
        }
    }

    // Top-down evaluation from (0, n - 1) with an explicit stack. A window is
    // only evaluated once everything it reads is set; otherwise its missing
    // dependencies are pushed above it.
    fn fill_memoized(&mut self, sequence: &[Base]) {
        let n = sequence.len();
        if n == 0 {
            return;
        }

        let mut stack = vec![(0, n - 1)];
        let mut pending = Vec::new();

        while let Some(&(i, j)) = stack.last() {
            if self.is_computed(i, j) {
                stack.pop();
                continue;
            }

            self.missing_dependencies(sequence, i, j, &mut pending);
            if pending.is_empty() {
                self.dp[[i, j]] = Some(self.best(sequence, i, j));
                stack.pop();
            } else {
                stack.append(&mut pending);
            }
        }
    }

    fn missing_dependencies(
        &self,
        sequence: &[Base],
        i: usize,
        j: usize,
        pending: &mut Vec<(usize, usize)>,
    ) {
        if !self.is_computed(i, j - 1) {
            pending.push((i, j - 1));
        }

        for t in i..(j - self.min_loop_length) {
            if !is_complementary(sequence[t], sequence[j]) {
                continue;
            }
            if t > i && !self.is_computed(i, t - 1) {
                pending.push((i, t - 1));
            }
            if !self.is_computed(t + 1, j - 1) {
                pending.push((t + 1, j - 1));
            }
        }
    }
}

// Full n x n dump, one row per line. Unset entries print as `-`.
impl fmt::Display for ScoreMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            let row: Vec<String> = (0..self.len())
                .map(|j| match self.get(i, j) {
                    Some(score) => score.to_string(),
                    None => "-".to_string(),
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complementarity::MIN_LOOP_LENGTH;
    use crate::sequence::RnaSequence;

    fn build(seq: &str, strategy: FillStrategy) -> ScoreMatrix {
        let seq: RnaSequence = seq.parse().unwrap();
        ScoreMatrix::build(&seq, MIN_LOOP_LENGTH, strategy)
    }

    #[test]
    fn test_empty() {
        let m = build("", FillStrategy::BottomUp);
        assert!(m.is_empty());
        assert_eq!(m.total_score(), 0);
        assert_eq!(build("", FillStrategy::Memoized).total_score(), 0);
    }

    #[test]
    fn test_short_sequences_score_zero() {
        for seq in ["A", "AU", "AUGC", "GAAAC"] {
            assert_eq!(build(seq, FillStrategy::BottomUp).total_score(), 0, "{}", seq);
            assert_eq!(build(seq, FillStrategy::Memoized).total_score(), 0, "{}", seq);
        }
    }

    #[test]
    fn test_single_pair() {
        let m = build("AAAAAU", FillStrategy::BottomUp);
        assert_eq!(m.total_score(), 1);
        assert_eq!(m.score(0, 4), 0);
        assert_eq!(m.score(1, 5), 0);
    }

    #[test]
    fn test_no_complementary_bases() {
        assert_eq!(build("AAAAAAA", FillStrategy::BottomUp).total_score(), 0);
        assert_eq!(build("GGGGGGGGGGGG", FillStrategy::Memoized).total_score(), 0);
    }

    #[test]
    fn test_nested_stem() {
        // GGG AAAAA CCC: three stacked G-C pairs around a 5-nt loop
        let m = build("GGGAAAAACCC", FillStrategy::BottomUp);
        assert_eq!(m.total_score(), 3);
    }

    #[test]
    fn test_rows_non_decreasing() {
        let m = build("GGGAAAUCCAUGCAUUAGCGAUCCGA", FillStrategy::BottomUp);
        for i in 0..m.len() {
            for j in (i + 1)..m.len() {
                assert!(m.score(i, j) >= m.score(i, j - 1));
            }
        }
    }

    #[test]
    fn test_strategies_agree() {
        let seq = "GGGAAAUCCAUGCAUUAGCGAUCCGAUCGAUA";
        let bottom_up = build(seq, FillStrategy::BottomUp);
        let memoized = build(seq, FillStrategy::Memoized);
        assert_eq!(bottom_up.total_score(), memoized.total_score());
        for i in 0..bottom_up.len() {
            for j in i..bottom_up.len() {
                if let Some(score) = memoized.get(i, j) {
                    assert_eq!(score, bottom_up.score(i, j), "window ({}, {})", i, j);
                }
            }
        }
    }

    #[test]
    fn test_memoized_leaves_unreached_windows_unset() {
        // (1, 9) is never read on the way down from (0, 9)
        let m = build("AAAAAAAAAU", FillStrategy::Memoized);
        assert_eq!(m.total_score(), 1);
        assert!(m.is_computed(0, 9));
        assert!(!m.is_computed(1, 9));
        let full = build("AAAAAAAAAU", FillStrategy::BottomUp);
        assert!(full.is_computed(1, 9));
    }

    #[test]
    fn test_custom_min_loop_length() {
        let seq: RnaSequence = "GAAC".parse().unwrap();
        assert_eq!(ScoreMatrix::build(&seq, 2, FillStrategy::BottomUp).total_score(), 1);
        assert_eq!(ScoreMatrix::build(&seq, 3, FillStrategy::BottomUp).total_score(), 0);
        assert_eq!(ScoreMatrix::build(&seq, 0, FillStrategy::Memoized).total_score(), 1);
    }

    #[test]
    fn test_display_marks_unset() {
        let m = build("AAAAAAU", FillStrategy::Memoized);
        let dump = m.to_string();
        let rows: Vec<&str> = dump.lines().collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "0 0 0 0 0 0 1");
        assert_eq!(rows[1], "0 0 0 0 0 0 -");
        assert_eq!(rows[6], "0 0 0 0 0 0 0");
    }

    #[test]
    #[should_panic(expected = "never computed")]
    fn test_unset_score_panics() {
        let m = build("AAAAAAAAAU", FillStrategy::Memoized);
        m.score(1, 9);
    }
}
