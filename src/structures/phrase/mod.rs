//! Phrases, aka. sets of unique literals.
//!
//! A phrase has no sense of conjunction or disjunction of its own.
//! How a phrase is read is fixed by the [rules](crate::structures::sentence::Rules) of the sentence holding it.
//!
//! Two backends are provided:
//! - [DensePhrase], a single machine word over the atom domain `0..64`.
//! - [SparsePhrase], an ordered set over the full [Atom](crate::structures::atom::Atom) domain.
//!
//! ```rust
//! # use boolnf::structures::phrase::{DensePhrase, Phrase};
//! let mut phrase = DensePhrase::from_literals([4, 2, 7]);
//! phrase.insert(2);
//!
//! assert_eq!(phrase.cardinality(), 3);
//! assert_eq!(phrase.literals().collect::<Vec<_>>(), vec![2, 4, 7]);
//! assert!(phrase.contains_all(&DensePhrase::from_literals([2, 7])));
//! ```
//!
//! - Phrases are identified by content: two phrases holding the same literals are equal, whatever their backends did to arrive there.
//! - The empty phrase is a valid phrase, and as the sole phrase of a sentence it is the unit the sentence's rules interpret as true or false.

use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::types::err::LiteralError;

mod dense;
mod sparse;
pub use dense::DensePhrase;
pub use sparse::SparsePhrase;

/// The phrase trait.
pub trait Phrase: Clone + Debug + Eq + Hash + Send + Sync {
    /// The literal representation of the backend.
    type Literal: Copy + Debug + Display + Eq + Hash + Ord + Send + Sync;

    /// The phrase without literals.
    fn empty() -> Self;

    /// The phrase of at most one literal, with `None` giving the empty phrase.
    fn singleton(literal: Option<Self::Literal>) -> Self;

    /// The number of literals in the phrase.
    fn cardinality(&self) -> usize;

    /// Whether the phrase holds no literals.
    fn is_empty(&self) -> bool;

    /// Whether `literal` is in the phrase.
    fn contains(&self, literal: Self::Literal) -> bool;

    /// Whether every literal of `other` is in the phrase.
    fn contains_all(&self, other: &Self) -> bool;

    /// Whether some literal of `other` is in the phrase.
    fn contains_any(&self, other: &Self) -> bool;

    /// Add `literal` to the phrase, a no-op if already present.
    fn insert(&mut self, literal: Self::Literal);

    /// Remove `literal` from the phrase, a no-op if absent.
    fn remove(&mut self, literal: Self::Literal);

    /// Add every literal of `other` to the phrase.
    fn union_with(&mut self, other: &Self);

    /// Extend `collection` with every literal of the phrase.
    fn collect_into(&self, collection: &mut HashSet<Self::Literal>);

    /// An iterator over the literals of the phrase, in ascending order.
    fn literals(&self) -> impl Iterator<Item = Self::Literal> + '_;

    /// The least literal of the phrase, if the phrase is non-empty.
    fn min_literal(&self) -> Option<Self::Literal>;

    /// Read a literal from text.
    ///
    /// `Ok(None)` on the empty string --- the absent-literal sentinel, skipped by sentence readers.
    fn parse_literal(text: &str) -> Result<Option<Self::Literal>, LiteralError>;

    /// The phrase holding the given literals.
    fn from_literals(literals: impl IntoIterator<Item = Self::Literal>) -> Self {
        let mut phrase = Self::empty();
        for literal in literals {
            phrase.insert(literal);
        }
        phrase
    }
}
