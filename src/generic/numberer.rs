/*!
Assignment of fresh numeric ids to values.

A [Numberer] hands out ids for values, minting a fresh id the first time a value is seen and returning the same id on every later sighting.
The assignment is injective and only ever grows.

The intended use is placeholder generation: a sub-formula is extracted from a sentence, numbered, and the id --- as an atom --- stands in for the sub-formula until resolved back.
*/

use std::collections::HashMap;
use std::hash::Hash;

use crate::structures::atom::Atom;

/// An injective, growing map from values to numeric ids.
pub trait Numberer<V> {
    /// The id of `value`, minted fresh if `value` has not been seen.
    fn number_of(&mut self, value: V) -> Atom;

    /// The id the next unseen value would receive.
    fn next_available(&self) -> Atom;

    /// The id of `value`, if one has been assigned.
    fn number_for(&self, value: &V) -> Option<Atom>;
}

/// A numberer handing out ids in sequence from some base.
#[derive(Clone, Debug)]
pub struct SequentialNumberer<V> {
    assigned: HashMap<V, Atom>,
    next: Atom,
}

impl<V> SequentialNumberer<V> {
    /// A numberer whose first minted id is `base`.
    ///
    /// The base should sit above every atom the numbered values may contain, or a minted id may collide with an existing atom.
    pub fn new(base: Atom) -> Self {
        SequentialNumberer {
            assigned: HashMap::default(),
            next: base,
        }
    }

    /// The count of values assigned an id.
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    /// The assignments made so far.
    pub fn assigned(&self) -> &HashMap<V, Atom> {
        &self.assigned
    }
}

impl<V: Eq + Hash> Numberer<V> for SequentialNumberer<V> {
    fn number_of(&mut self, value: V) -> Atom {
        match self.assigned.get(&value) {
            Some(id) => *id,

            None => {
                let id = self.next;
                self.assigned.insert(value, id);
                self.next += 1;
                id
            }
        }
    }

    fn next_available(&self) -> Atom {
        self.next
    }

    fn number_for(&self, value: &V) -> Option<Atom> {
        self.assigned.get(value).copied()
    }
}
