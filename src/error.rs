use thiserror::Error;

/// Errors raised while reading and validating input. Folding itself never
/// fails.
#[derive(Debug, Error)]
pub enum RnaFoldError {
    /// File could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed FASTA input
    #[error("FASTA error: {0}")]
    Fasta(#[from] seq_io::fasta::Error),
    /// A character outside the RNA alphabet (A, U, G, C)
    #[error("Invalid base '{base}' at position {position}")]
    InvalidBase { position: usize, base: char },
    /// FASTA record header that is not valid UTF-8
    #[error("Invalid record id: {0}")]
    InvalidRecordId(String),
    /// Unbalanced or unknown symbol in a dot-bracket string
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
    #[error("Invalid fill strategy: {0}")]
    InvalidStrategy(String),
}

pub type Result<T> = std::result::Result<T, RnaFoldError>;
