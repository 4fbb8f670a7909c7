//! A phrase over the full atom domain, stored as an ordered set.

use std::collections::{BTreeSet, HashSet};

use super::Phrase;
use crate::structures::atom::Atom;
use crate::types::err::LiteralError;

/// A phrase over the full [Atom] domain.
///
/// The backing set is ordered, so ascending iteration is free and hashing is content-stable.
/// This is the backend for placeholder work: fresh atoms can always be minted above those in use.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SparsePhrase {
    literals: BTreeSet<Atom>,
}

impl Phrase for SparsePhrase {
    type Literal = Atom;

    fn empty() -> Self {
        SparsePhrase {
            literals: BTreeSet::default(),
        }
    }

    fn singleton(literal: Option<Atom>) -> Self {
        let mut phrase = Self::empty();
        if let Some(literal) = literal {
            phrase.literals.insert(literal);
        }
        phrase
    }

    fn cardinality(&self) -> usize {
        self.literals.len()
    }

    fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    fn contains(&self, literal: Atom) -> bool {
        self.literals.contains(&literal)
    }

    fn contains_all(&self, other: &Self) -> bool {
        other.literals.is_subset(&self.literals)
    }

    fn contains_any(&self, other: &Self) -> bool {
        !self.literals.is_disjoint(&other.literals)
    }

    fn insert(&mut self, literal: Atom) {
        self.literals.insert(literal);
    }

    fn remove(&mut self, literal: Atom) {
        self.literals.remove(&literal);
    }

    fn union_with(&mut self, other: &Self) {
        self.literals.extend(other.literals.iter().copied());
    }

    fn collect_into(&self, collection: &mut HashSet<Atom>) {
        collection.extend(self.literals.iter().copied());
    }

    fn literals(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals.iter().copied()
    }

    fn min_literal(&self) -> Option<Atom> {
        self.literals.first().copied()
    }

    fn parse_literal(text: &str) -> Result<Option<Atom>, LiteralError> {
        if text.is_empty() {
            return Ok(None);
        }

        match text.parse::<Atom>() {
            Ok(atom) => Ok(Some(atom)),
            Err(_) => Err(LiteralError::Unreadable(text.to_owned())),
        }
    }
}
