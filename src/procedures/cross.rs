/*!
Cross products: distributing the phrases of one sentence over another's.

Under disjunctive rules the cross product is conjunction of sentences, under conjunctive rules disjunction --- in both cases each phrase of one side is unioned with each phrase of the other, and the results re-minimised.

The distribution is built from the [partitioned append](crate::procedures::absorption) for the single-phrase factor, and from [merge](crate::structures::sentence::Sentence::merge) to combine the per-phrase groups: absorption can collapse across groups, so the groups cannot simply be unioned.
*/

use crate::config::Config;
use crate::misc::log::targets;
use crate::structures::phrase::Phrase;
use crate::structures::sentence::Sentence;
use crate::types::err::MutationError;

impl<P: Phrase> Sentence<P> {
    /// Cross with a single phrase: union it into every held phrase, re-minimising.
    pub fn cross_phrase(&mut self, phrase: &P) -> Result<(), MutationError> {
        self.guard()?;
        self.cross_phrase_in(phrase);
        Ok(())
    }

    /// Cross with another sentence.
    ///
    /// `other` is read only; phrases taken from it are cloned.
    pub fn cross_sentence(&mut self, other: &Self, config: &Config) -> Result<(), MutationError> {
        self.guard()?;
        self.cross_into(other, config);
        Ok(())
    }

    pub(crate) fn cross_phrase_in(&mut self, phrase: &P) {
        if self.phrases.is_empty() {
            // {} x (B) = {}        (annulment)
        } else if phrase.is_empty() {
            // {A} x () = {A}       (identity)
        } else if self.is_unit() {
            // {()} x (B) = {(B)}   (identity)
            self.phrases.clear();
            self.phrases.insert(phrase.clone());
        } else {
            self.append_phrase(phrase);
        }
    }

    pub(crate) fn cross_into(&mut self, other: &Self, config: &Config) {
        debug_assert_eq!(self.rules(), other.rules());

        // Short-circuit cases arranged in order of (approximate) speed, with the
        // final block the normal case.
        if self.phrases.is_empty() {
            // {} x {B} = {}        (annulment)
        } else if other.phrases.is_empty() {
            // {A} x {} = {}        (annulment)
            self.phrases.clear();
        } else if other.phrases.len() == 1 {
            // A single-phrase factor, including the {A} x {()} = {A} identity.
            if let Some(phrase) = other.phrases.iter().next() {
                self.cross_phrase_in(phrase);
            }
        } else if self.is_unit() {
            // {()} x {B} = {B}     (identity)
            self.phrases = other.phrases.clone();
        } else if self.phrases == other.phrases {
            // {A} x {A} = {A}      (idempotence)
        } else {
            log::trace!(
                target: targets::CROSS,
                "Cross of {} phrases over {}",
                other.phrases.len(),
                self.phrases.len()
            );

            let original = self.duplicate(false);
            self.phrases.clear();
            for phrase in &other.phrases {
                let mut group = original.duplicate(false);
                group.append_phrase(phrase);
                self.merge_in(&group, config);
            }
        }
    }
}
