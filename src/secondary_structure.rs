use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RnaFoldError};

mod dot_bracket {
    pub const UNPAIRED: u8 = b'.';
    pub const OPEN: u8 = b'(';
    pub const CLOSE: u8 = b')';
}

/// Role of a single position in a structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Unpaired,
    /// 5' partner of a pair
    Open,
    /// 3' partner of a pair
    Close,
}

impl Symbol {
    pub fn as_byte(self) -> u8 {
        match self {
            Symbol::Unpaired => dot_bracket::UNPAIRED,
            Symbol::Open => dot_bracket::OPEN,
            Symbol::Close => dot_bracket::CLOSE,
        }
    }

    pub fn from_byte(b: u8) -> Option<Symbol> {
        match b {
            dot_bracket::UNPAIRED => Some(Symbol::Unpaired),
            dot_bracket::OPEN => Some(Symbol::Open),
            dot_bracket::CLOSE => Some(Symbol::Close),
            _ => None,
        }
    }
}

// five_prime_idx, three_prime_idx
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct BasePair(pub usize, pub usize);

impl BasePair {
    pub fn five_prime_index(&self) -> usize {
        self.0
    }

    pub fn three_prime_index(&self) -> usize {
        self.1
    }

    // number of positions enclosed by the pair
    pub fn loop_length(&self) -> usize {
        self.1 - self.0 - 1
    }
}

/// A pseudoknot-free secondary structure, one [`Symbol`] per position.
///
/// Renders as dot-bracket text through `Display`.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct StructureAnnotation {
    symbols: Vec<Symbol>,
}

impl StructureAnnotation {
    /// All positions unpaired.
    pub fn unpaired(length: usize) -> Self {
        Self {
            symbols: vec![Symbol::Unpaired; length],
        }
    }

    /// Parses and validates dot-bracket text. Brackets must balance.
    pub fn from_dot_bracket(structure: &str) -> Result<Self> {
        let mut depth = 0usize;
        let mut symbols = Vec::with_capacity(structure.len());

        for (i, &c) in structure.as_bytes().iter().enumerate() {
            let symbol = Symbol::from_byte(c).ok_or_else(|| {
                RnaFoldError::InvalidStructure(format!(
                    "unexpected symbol '{}' at position {}",
                    c as char, i
                ))
            })?;
            match symbol {
                Symbol::Open => depth += 1,
                Symbol::Close => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        RnaFoldError::InvalidStructure(format!("unmatched ')' at position {}", i))
                    })?;
                }
                Symbol::Unpaired => {}
            }
            symbols.push(symbol);
        }

        if depth != 0 {
            return Err(RnaFoldError::InvalidStructure(format!(
                "{} unmatched '('",
                depth
            )));
        }

        Ok(Self { symbols })
    }

    pub(crate) fn set_pair(&mut self, pair: BasePair) {
        debug_assert!(pair.0 < pair.1);
        debug_assert_eq!(self.symbols[pair.0], Symbol::Unpaired);
        debug_assert_eq!(self.symbols[pair.1], Symbol::Unpaired);
        self.symbols[pair.0] = Symbol::Open;
        self.symbols[pair.1] = Symbol::Close;
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn pair_count(&self) -> usize {
        self.symbols.iter().filter(|&&s| s == Symbol::Open).count()
    }

    /// Partner index of every position, `None` if unpaired.
    pub fn pair_table(&self) -> Vec<Option<usize>> {
        let mut stack: Vec<usize> = Vec::new();
        let mut pt: Vec<Option<usize>> = vec![None; self.symbols.len()];

        for (i, &s) in self.symbols.iter().enumerate() {
            match s {
                Symbol::Open => stack.push(i),
                Symbol::Close => {
                    if let Some(open) = stack.pop() {
                        pt[open] = Some(i);
                        pt[i] = Some(open);
                    }
                }
                Symbol::Unpaired => {}
            }
        }

        pt
    }

    /// All pairs, ordered by 5' index.
    pub fn pairs(&self) -> Vec<BasePair> {
        self.pair_table()
            .iter()
            .enumerate()
            .filter_map(|(i, &partner)| match partner {
                Some(j) if i < j => Some(BasePair(i, j)),
                _ => None,
            })
            .collect()
    }

    pub fn has_pair(&self, idx: usize) -> bool {
        self.symbols[idx] != Symbol::Unpaired
    }
}

impl FromStr for StructureAnnotation {
    type Err = RnaFoldError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_dot_bracket(s)
    }
}

impl fmt::Display for StructureAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes: Vec<u8> = self.symbols.iter().map(|s| s.as_byte()).collect();
        // only ASCII symbols are ever stored
        f.write_str(&String::from_utf8_lossy(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaired() {
        let ss = StructureAnnotation::unpaired(4);
        assert_eq!(ss.to_string(), "....");
        assert_eq!(ss.pair_count(), 0);
        assert!(StructureAnnotation::unpaired(0).is_empty());
    }

    #[test]
    fn test_pair_table_from_db() {
        let ss = StructureAnnotation::from_dot_bracket("..((..))..").unwrap();
        let pt = ss.pair_table();
        assert_eq!(pt[2], Some(7));
        assert_eq!(pt[7], Some(2));
        assert_eq!(pt[3], Some(6));
        assert_eq!(pt[0], None);
        assert!(ss.has_pair(3));
        assert!(!ss.has_pair(4));
    }

    #[test]
    fn test_pairs_ordered() {
        let ss: StructureAnnotation = "(.(...)..(...))".parse().unwrap();
        assert_eq!(
            ss.pairs(),
            vec![BasePair(0, 14), BasePair(2, 6), BasePair(9, 13)]
        );
        assert_eq!(ss.pairs()[1].loop_length(), 3);
        assert_eq!(ss.pair_count(), 3);
    }

    #[test]
    fn test_set_pair_renders() {
        let mut ss = StructureAnnotation::unpaired(6);
        ss.set_pair(BasePair(0, 5));
        assert_eq!(ss.to_string(), "(....)");
    }

    #[test]
    fn test_db_rejects_unbalanced() {
        assert!(matches!(
            StructureAnnotation::from_dot_bracket("(()"),
            Err(RnaFoldError::InvalidStructure(_))
        ));
        assert!(matches!(
            StructureAnnotation::from_dot_bracket("())("),
            Err(RnaFoldError::InvalidStructure(_))
        ));
        assert!(matches!(
            StructureAnnotation::from_dot_bracket("(.x)"),
            Err(RnaFoldError::InvalidStructure(_))
        ));
    }
}
