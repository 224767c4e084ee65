use crate::complementarity::is_complementary;
use crate::score_matrix::ScoreMatrix;
use crate::secondary_structure::{BasePair, StructureAnnotation};
use crate::sequence::Base;

/// Reconstructs one optimal structure from a filled score matrix.
///
/// Whenever the 3' end `j` of a window is paired, its partner is the smallest
/// `t` that reproduces the window's score. Nussinov optima are generally not
/// unique; this rule fixes which one is returned.
///
/// # Panics
///
/// If `matrix` was not built from `sequence`. The matrix is trusted, so an
/// inconsistent one is a caller bug rather than an error.
pub fn traceback(sequence: &[Base], matrix: &ScoreMatrix) -> StructureAnnotation {
    let n = sequence.len();
    assert_eq!(
        matrix.len(),
        n,
        "score matrix is {}x{} but the sequence has length {}",
        matrix.len(),
        matrix.len(),
        n
    );

    let mut structure = StructureAnnotation::unpaired(n);
    if n == 0 {
        return structure;
    }

    let mut stack = vec![(0, n - 1)];
    while let Some((i, j)) = stack.pop() {
        if j <= i {
            continue;
        }

        // j unpaired
        if matrix.score(i, j) == matrix.score(i, j - 1) {
            stack.push((i, j - 1));
            continue;
        }

        let t = find_partner(sequence, matrix, i, j);
        structure.set_pair(BasePair(t, j));

        if t > i {
            stack.push((i, t - 1));
        }
        stack.push((t + 1, j - 1));
    }

    structure
}

// First t (ascending) that pairs with j and accounts for the score of (i, j).
fn find_partner(sequence: &[Base], matrix: &ScoreMatrix, i: usize, j: usize) -> usize {
    let score = matrix.score(i, j);
    let last = j.saturating_sub(matrix.min_loop_length());

    (i..last)
        .find(|&t| {
            is_complementary(sequence[t], sequence[j])
                && score == 1 + matrix.score_before(i, t) + matrix.score(t + 1, j - 1)
        })
        .unwrap_or_else(|| {
            panic!(
                "inconsistent score matrix: no partner for position {} in window ({}, {})",
                j, i, j
            )
        })
}
