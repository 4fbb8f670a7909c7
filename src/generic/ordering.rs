/*!
Orderings on phrases.

Phrases live in hash sets, so a sentence has no inherent order.
For stable text output an order is imposed: fewer literals first, ties broken on the first differing literal.
*/

use std::cmp::Ordering;

use crate::structures::phrase::Phrase;

/// Compare phrases by cardinality, breaking ties on the first differing literal.
///
/// Literal iteration is ascending, so equal-cardinality phrases compare lexicographically on their sorted contents.
pub fn phrase_order<P: Phrase>(a: &P, b: &P) -> Ordering {
    match a.cardinality().cmp(&b.cardinality()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }

    for (x, y) in a.literals().zip(b.literals()) {
        match x.cmp(&y) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }

    Ordering::Equal
}
