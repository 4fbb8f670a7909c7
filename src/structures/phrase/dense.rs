//! A phrase over the bounded atom domain `0..64`, stored as the bits of a u64.

use std::collections::HashSet;

use super::Phrase;
use crate::structures::atom::Atom;
use crate::types::err::LiteralError;

/// A phrase over the atom domain `0..`[ATOM_LIMIT](Self::ATOM_LIMIT), atom *a* held as bit *a*.
///
/// Set operations are single word operations, and the phrase is `Copy`.
/// In exchange, the domain is fixed --- [parse_literal](Phrase::parse_literal) rejects atoms at or above the limit, and inserting such an atom directly is a contract violation (checked when debug assertions are enabled).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DensePhrase {
    bits: u64,
}

impl DensePhrase {
    /// The exclusive upper bound on atoms a dense phrase can hold.
    pub const ATOM_LIMIT: Atom = u64::BITS;
}

impl Phrase for DensePhrase {
    type Literal = Atom;

    fn empty() -> Self {
        DensePhrase { bits: 0 }
    }

    fn singleton(literal: Option<Atom>) -> Self {
        match literal {
            Some(literal) => {
                debug_assert!(literal < Self::ATOM_LIMIT);
                DensePhrase { bits: 1_u64 << literal }
            }

            None => Self::empty(),
        }
    }

    fn cardinality(&self) -> usize {
        self.bits.count_ones() as usize
    }

    fn is_empty(&self) -> bool {
        self.bits == 0
    }

    fn contains(&self, literal: Atom) -> bool {
        debug_assert!(literal < Self::ATOM_LIMIT);
        self.bits & (1_u64 << literal) != 0
    }

    fn contains_all(&self, other: &Self) -> bool {
        self.bits & other.bits == other.bits
    }

    fn contains_any(&self, other: &Self) -> bool {
        self.bits & other.bits != 0
    }

    fn insert(&mut self, literal: Atom) {
        debug_assert!(literal < Self::ATOM_LIMIT);
        self.bits |= 1_u64 << literal;
    }

    fn remove(&mut self, literal: Atom) {
        debug_assert!(literal < Self::ATOM_LIMIT);
        self.bits &= !(1_u64 << literal);
    }

    fn union_with(&mut self, other: &Self) {
        self.bits |= other.bits;
    }

    fn collect_into(&self, collection: &mut HashSet<Atom>) {
        collection.extend(self.literals());
    }

    fn literals(&self) -> impl Iterator<Item = Atom> + '_ {
        (0..u64::BITS).filter(|bit| self.bits & (1_u64 << bit) != 0)
    }

    fn min_literal(&self) -> Option<Atom> {
        match self.bits {
            0 => None,
            bits => Some(bits.trailing_zeros()),
        }
    }

    fn parse_literal(text: &str) -> Result<Option<Atom>, LiteralError> {
        if text.is_empty() {
            return Ok(None);
        }

        match text.parse::<Atom>() {
            Ok(atom) if atom < Self::ATOM_LIMIT => Ok(Some(atom)),
            Ok(_) => Err(LiteralError::OutOfDomain(text.to_owned())),
            Err(_) => Err(LiteralError::Unreadable(text.to_owned())),
        }
    }
}
