//! Reading and validating input sequences.
//!
//! Two file layouts are accepted:
//!
//! - a plain read: base characters, optionally separated by whitespace
//!   (spaces, tabs, line breaks);
//! - (multi-)FASTA, recognized by a leading `>`.
//!
//! Bases are case-sensitive; anything other than `A`, `U`, `G` or `C` rejects
//! the input.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use seq_io::fasta::{self, Record};

use crate::error::{Result, RnaFoldError};
use crate::sequence::{Base, RnaSequence};

/// A sequence together with its FASTA id, if it came from a FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSequence {
    pub id: Option<String>,
    pub sequence: RnaSequence,
}

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

fn invalid_base_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^AUGC]").expect("base pattern is valid"))
}

/// Validates a single sequence held in memory. Whitespace is ignored; error
/// positions count non-whitespace characters only.
pub fn parse_sequence(text: &str) -> Result<RnaSequence> {
    let compact = whitespace_pattern().replace_all(text, "");

    if let Some(m) = invalid_base_pattern().find(&compact) {
        return Err(RnaFoldError::InvalidBase {
            position: compact[..m.start()].chars().count(),
            base: m.as_str().chars().next().unwrap_or('?'),
        });
    }

    // every byte left is one of AUGC
    Ok(compact.bytes().filter_map(Base::from_byte).collect())
}

/// Parses every record of a FASTA stream.
pub fn parse_fasta<R: io::Read>(reader: R) -> Result<Vec<NamedSequence>> {
    let mut reader = fasta::Reader::new(reader);
    let mut records = Vec::new();

    while let Some(result) = reader.next() {
        let record = result?;
        let id = record
            .id()
            .map_err(|e| RnaFoldError::InvalidRecordId(e.to_string()))?
            .to_string();
        let seq = record.full_seq();
        let sequence = parse_sequence(&String::from_utf8_lossy(&seq))?;

        records.push(NamedSequence {
            id: Some(id),
            sequence,
        });
    }

    Ok(records)
}

/// Reads all sequences from `path`, either a plain read or FASTA.
///
/// A plain read always yields exactly one sequence, which is empty for an
/// empty file.
pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<NamedSequence>> {
    let contents = fs::read_to_string(path)?;
    let trimmed = contents.trim_start();

    if trimmed.starts_with('>') {
        parse_fasta(trimmed.as_bytes())
    } else {
        Ok(vec![NamedSequence {
            id: None,
            sequence: parse_sequence(&contents)?,
        }])
    }
}
