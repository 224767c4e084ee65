//! RNA secondary structure prediction by base-pair maximization
//! (Nussinov algorithm).
//!
//! ```rust
//! use rnafold::{fold, FoldConfig, RnaSequence};
//!
//! let seq: RnaSequence = "GGGAAAAACCC".parse()?;
//! let result = fold(&seq, &FoldConfig::default());
//! assert_eq!(result.structure.to_string(), "(((.....)))");
//! assert_eq!(result.score, 3);
//! # Ok::<(), rnafold::RnaFoldError>(())
//! ```

pub mod complementarity;
pub mod config;
pub mod error;
pub mod io;
pub mod score_matrix;
pub mod secondary_structure;
pub mod sequence;
pub mod traceback;

pub use complementarity::{is_complementary, MIN_LOOP_LENGTH};
pub use config::{FillStrategy, FoldConfig, OutputOptions};
pub use error::{Result, RnaFoldError};
pub use score_matrix::ScoreMatrix;
pub use secondary_structure::{BasePair, StructureAnnotation, Symbol};
pub use sequence::{Base, RnaSequence};

/// Outcome of folding one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Fold {
    pub structure: StructureAnnotation,
    /// Number of base pairs in `structure`, the maximum possible.
    pub score: u32,
    pub matrix: ScoreMatrix,
}

#[derive(Debug)]
pub struct FoldContext<'a> {
    pub sequence: &'a [Base],
    pub config: &'a FoldConfig,
    pub matrix: Option<ScoreMatrix>,
}

impl<'a> FoldContext<'a> {
    pub fn new(sequence: &'a [Base], config: &'a FoldConfig) -> Self {
        Self {
            sequence,
            config,
            matrix: None,
        }
    }

    fn build_matrix(&self) -> ScoreMatrix {
        ScoreMatrix::build(
            self.sequence,
            self.config.min_loop_length,
            self.config.strategy,
        )
    }

    // Fill the score matrix with the Nussinov recurrence
    pub fn nussinov(&mut self) -> &ScoreMatrix {
        let matrix = self.build_matrix();
        self.matrix.insert(matrix)
    }

    // Traceback through the filled matrix; fills it first if needed
    pub fn traceback(&mut self) -> StructureAnnotation {
        if self.matrix.is_none() {
            self.nussinov();
        }
        match &self.matrix {
            Some(matrix) => traceback::traceback(self.sequence, matrix),
            None => StructureAnnotation::unpaired(self.sequence.len()),
        }
    }

    pub fn into_fold(mut self) -> Fold {
        let matrix = match self.matrix.take() {
            Some(matrix) => matrix,
            None => self.build_matrix(),
        };
        let structure = traceback::traceback(self.sequence, &matrix);
        Fold {
            score: matrix.total_score(),
            structure,
            matrix,
        }
    }
}

/// Folds `sequence` and returns one maximum-pairing structure.
pub fn fold(sequence: &[Base], config: &FoldConfig) -> Fold {
    FoldContext::new(sequence, config).into_fold()
}
