use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::RnaFoldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    U,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::U];

    // Strict: lowercase and DNA `T` are not bases.
    pub fn from_byte(b: u8) -> Option<Base> {
        match b {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'U' => Some(Base::U),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered, validated RNA sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RnaSequence {
    bases: Vec<Base>,
}

impl RnaSequence {
    pub fn new(bases: Vec<Base>) -> Self {
        Self { bases }
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }
}

impl Deref for RnaSequence {
    type Target = [Base];

    fn deref(&self) -> &[Base] {
        &self.bases
    }
}

impl FromIterator<Base> for RnaSequence {
    fn from_iter<I: IntoIterator<Item = Base>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for RnaSequence {
    type Err = RnaFoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::io::parse_sequence(s)
    }
}

impl fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bases {
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte() {
        assert_eq!(Base::from_byte(b'A'), Some(Base::A));
        assert_eq!(Base::from_byte(b'U'), Some(Base::U));
        assert_eq!(Base::from_byte(b'T'), None);
        assert_eq!(Base::from_byte(b'g'), None);
    }

    #[test]
    fn test_display_round_trip() {
        let seq: RnaSequence = "GGGAAAUCC".parse().unwrap();
        assert_eq!(seq.len(), 9);
        assert_eq!(seq[0], Base::G);
        assert_eq!(seq.to_string(), "GGGAAAUCC");
    }
}
