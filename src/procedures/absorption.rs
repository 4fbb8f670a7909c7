/*!
Absorption, and the phrase additions built around it.

A phrase x absorbs a phrase y when x is a subset of y.
Under either reading of a sentence the absorbed phrase is redundant --- x ∨ (x ∧ r) = x, and dually x ∧ (x ∨ r) = x --- so a sentence keeps only absorbers.
The invariant maintained at every public boundary: no phrase of a sentence is a subset of another phrase of the same sentence.

The appends below lean on that invariant to skip most pairwise checks.
In each case the phrases are split into a partition which provably cannot be absorbed after the addition and a partition which might be, and only the second is checked --- against the first.
The claims justifying the partitions are noted inline.
*/

use std::collections::HashSet;

use crate::structures::phrase::Phrase;
use crate::structures::sentence::Sentence;
use crate::types::err::MutationError;

/// Whether `absorber` absorbs `target`: every literal of `absorber` occurs in `target`.
pub fn absorbs<P: Phrase>(absorber: &P, target: &P) -> bool {
    target.contains_all(absorber)
}

impl<P: Phrase> Sentence<P> {
    /// Add a phrase under the absorption law, taking ownership of the phrase.
    ///
    /// If some held phrase absorbs the addition, the addition is discarded.
    /// Otherwise every held phrase the addition absorbs is removed --- there may be several --- and the addition inserted.
    ///
    /// Returns whether the addition was inserted.
    pub fn add_phrase_absorbing(&mut self, phrase: P) -> Result<bool, MutationError> {
        self.guard()?;
        Ok(self.absorb_in(phrase))
    }

    /// Add a phrase of at most one literal under the absorption law.
    ///
    /// `None` gives the empty phrase, which absorbs every phrase: the sentence collapses to the unit.
    pub fn add_singleton_phrase(
        &mut self,
        literal: Option<P::Literal>,
    ) -> Result<bool, MutationError> {
        self.guard()?;
        Ok(self.add_singleton(literal))
    }

    /// Add the literal to every phrase, re-minimising under absorption.
    ///
    /// A no-op on a sentence of no phrases.
    pub fn append_literal_to_each(&mut self, literal: P::Literal) -> Result<(), MutationError> {
        self.guard()?;
        self.append_literal(literal);
        Ok(())
    }

    /// Union the given phrase into every phrase, re-minimising under absorption.
    ///
    /// A no-op on a sentence of no phrases, and with an empty addition.
    pub fn append_phrase_to_each(&mut self, addition: &P) -> Result<(), MutationError> {
        self.guard()?;
        self.append_phrase(addition);
        Ok(())
    }

    /// Whether every phrase of `other` is absorbed by some phrase of `self`.
    ///
    /// Exactly when this holds, merging `other` into `self` leaves `self` unchanged.
    pub fn absorbs(&self, other: &Self) -> bool {
        other
            .phrases
            .iter()
            .all(|target| self.phrases.iter().any(|absorber| absorbs(absorber, target)))
    }

    /// Whether no phrase is a subset of another.
    ///
    /// Holds at every public boundary; exposed for tests and debugging.
    pub fn satisfies_absorption_law(&self) -> bool {
        for absorber in &self.phrases {
            for target in &self.phrases {
                if !std::ptr::eq(absorber, target) && absorbs(absorber, target) {
                    return false;
                }
            }
        }
        true
    }

    // The single-scan kernel of add_phrase_absorbing.
    //
    // Discovering an absorber after some held phrase was dropped is impossible: a held
    // phrase below the addition and a held phrase above it would be in subset relation
    // with each other, against the invariant. The scan may therefore remove as it goes
    // and stop removing the moment an absorber appears.
    pub(crate) fn absorb_in(&mut self, phrase: P) -> bool {
        let mut absorbed = false;
        self.phrases.retain(|held| {
            if absorbed {
                return true;
            }
            if absorbs(held, &phrase) {
                absorbed = true;
                return true;
            }
            !absorbs(&phrase, held)
        });

        match absorbed {
            true => false,
            false => self.phrases.insert(phrase),
        }
    }

    pub(crate) fn add_singleton(&mut self, literal: Option<P::Literal>) -> bool {
        self.absorb_in(P::singleton(literal))
    }

    // The kernel of append_literal_to_each.
    //
    // CLAIM: after the literal is added everywhere, absorption can only run from a
    // phrase that already held the literal to one that did not. Two phrases that both
    // held it, or both lacked it, gained nothing relative to each other; and a phrase
    // that lacked it cannot absorb one that held it, as the absorbee keeps a literal
    // the absorber lacked before and still lacks.
    pub(crate) fn append_literal(&mut self, literal: P::Literal) {
        if self.phrases.is_empty() {
            return;
        }

        let mut safe: HashSet<P> = HashSet::with_capacity(self.phrases.len());
        let mut tentative: Vec<P> = Vec::new();
        for mut phrase in self.phrases.drain() {
            if phrase.contains(literal) {
                safe.insert(phrase);
            } else {
                phrase.insert(literal);
                tentative.push(phrase);
            }
        }

        // Tentative phrases cannot absorb one another: any such pair would have been
        // in subset relation before the shared literal was added.
        'tentative: for phrase in tentative {
            for absorber in &safe {
                if absorbs(absorber, &phrase) {
                    continue 'tentative;
                }
            }
            safe.insert(phrase);
        }

        self.phrases = safe;
    }

    // The kernel of append_phrase_to_each and of crossing with a single phrase.
    pub(crate) fn append_phrase(&mut self, addition: &P) {
        if self.phrases.is_empty() {
            return;
        }

        match addition.cardinality() {
            0 => {}

            1 => {
                if let Some(literal) = addition.min_literal() {
                    self.append_literal(literal);
                }
            }

            _ => self.append_phrase_fold(addition),
        }
    }

    // CLAIM: a phrase that already contains the whole addition cannot be absorbed.
    // Any other held phrase lacks some literal of it which the addition does not
    // supply, and unioning the addition into both changes neither fact.
    //
    // The remaining phrases take the addition one literal at a time, each round the
    // single-literal partition argument above, with candidates checked against the
    // settled partition and against the phrases that already held the round's literal.
    // Folding literal-wise keeps the checks to these two groups; re-adding full unions
    // through the single-scan kernel would instead compare all pairs.
    fn append_phrase_fold(&mut self, addition: &P) {
        let mut settled: HashSet<P> = HashSet::with_capacity(self.phrases.len());
        let mut open: Vec<P> = Vec::new();
        for phrase in self.phrases.drain() {
            if phrase.contains_all(addition) {
                settled.insert(phrase);
            } else {
                open.push(phrase);
            }
        }

        for literal in addition.literals() {
            let mut accepted: Vec<P> = Vec::with_capacity(open.len());
            let mut tentative: Vec<P> = Vec::new();
            for mut phrase in open.drain(..) {
                if phrase.contains(literal) {
                    accepted.push(phrase);
                } else {
                    phrase.insert(literal);
                    tentative.push(phrase);
                }
            }

            'tentative: for phrase in tentative {
                for absorber in &settled {
                    if absorbs(absorber, &phrase) {
                        continue 'tentative;
                    }
                }
                for absorber in &accepted {
                    if absorbs(absorber, &phrase) {
                        continue 'tentative;
                    }
                }
                accepted.push(phrase);
            }

            open = accepted;
        }

        settled.extend(open);
        self.phrases = settled;
    }
}
