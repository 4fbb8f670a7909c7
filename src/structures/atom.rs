/*!
(The representation of) an atom, aka. an atomic proposition.

Atoms are the things phrases are sets of, and the things to which symbolic
meaning is attached when a sentence is used as a placeholder-bearing formula.

Each atom is a u32.
The [dense phrase](crate::structures::phrase::DensePhrase) backend restricts
atoms to `0..64` so that a phrase fits in a single machine word, while the
[sparse phrase](crate::structures::phrase::SparsePhrase) backend accepts any
u32 and so supports minting fresh placeholder atoms without bound.

This representation allows atoms to double as compact identifiers, e.g. as
the ids handed out by a [numberer](crate::generic::numberer::Numberer).

# Notes
- Atoms carry no polarity. A phrase is a plain set, and negation is outside
  the scope of the library.
*/

/// An atom, aka. an atomic proposition.
pub type Atom = u32;
