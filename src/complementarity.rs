use crate::sequence::Base;

// MIN_LOOP_LENGTH is the minimum number of unpaired positions that must
// separate the two partners of a base pair (hairpin loop constraint).
pub const MIN_LOOP_LENGTH: usize = 4;

// BasePairType is the type of a canonical Watson-Crick pair, written 5' base
// first. G-U wobble pairs are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasePairType {
    AU,
    UA,
    CG,
    GC,
}

// encode_base_pair returns the type of the pair formed by a 5' and a 3' base,
// or `None` if the two bases don't pair.
pub fn encode_base_pair(five_prime_base: Base, three_prime_base: Base) -> Option<BasePairType> {
    match (five_prime_base, three_prime_base) {
        (Base::A, Base::U) => Some(BasePairType::AU),
        (Base::U, Base::A) => Some(BasePairType::UA),
        (Base::C, Base::G) => Some(BasePairType::CG),
        (Base::G, Base::C) => Some(BasePairType::GC),
        _ => None,
    }
}

/// Returns true iff `a` and `b` form an A-U or G-C pair, in either order.
#[inline]
pub fn is_complementary(a: Base, b: Base) -> bool {
    encode_base_pair(a, b).is_some()
}

/// Byte-level variant of [`is_complementary`]. Any byte outside `AUGC` never
/// pairs.
pub fn is_complementary_byte(a: u8, b: u8) -> bool {
    match (Base::from_byte(a), Base::from_byte(b)) {
        (Some(a), Some(b)) => is_complementary(a, b),
        _ => false,
    }
}
