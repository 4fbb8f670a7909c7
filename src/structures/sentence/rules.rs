//! The two connective regimes a sentence may be read through.

use std::collections::HashSet;

use super::Sentence;
use crate::config::Config;
use crate::structures::phrase::Phrase;
use crate::types::err::MutationError;

/// Connective rules: how the phrases of a sentence, and the literals of a phrase, are joined.
///
/// The rules fix which engine primitive each algebraic operation maps to, and which phrase sets are structurally true and false.
/// The two variants are exact duals, so every algorithm below the rules layer is shared.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Rules {
    /// Phrases are conjunctions, the sentence the disjunction of its phrases (DNF).
    Disjunctive,

    /// Phrases are disjunctions, the sentence the conjunction of its phrases (CNF).
    Conjunctive,
}

impl Rules {
    /// Whether the phrase set is structurally false under the rules.
    ///
    /// Disjunctive: the empty disjunction. Conjunctive: the conjunction of the single empty disjunction.
    pub fn is_false<P: Phrase>(self, phrases: &HashSet<P>) -> bool {
        match self {
            Self::Disjunctive => phrases.is_empty(),
            Self::Conjunctive => Self::is_unit_set(phrases),
        }
    }

    /// Whether the phrase set is structurally true under the rules.
    pub fn is_true<P: Phrase>(self, phrases: &HashSet<P>) -> bool {
        match self {
            Self::Disjunctive => Self::is_unit_set(phrases),
            Self::Conjunctive => phrases.is_empty(),
        }
    }

    pub(crate) fn make_false<P: Phrase>(self, phrases: &mut HashSet<P>) {
        phrases.clear();
        if matches!(self, Self::Conjunctive) {
            phrases.insert(P::empty());
        }
    }

    pub(crate) fn make_true<P: Phrase>(self, phrases: &mut HashSet<P>) {
        phrases.clear();
        if matches!(self, Self::Disjunctive) {
            phrases.insert(P::empty());
        }
    }

    /// Conjoin a literal to the sentence.
    pub fn and_literal<P: Phrase>(
        self,
        sentence: &mut Sentence<P>,
        literal: P::Literal,
    ) -> Result<(), MutationError> {
        sentence.guard()?;
        self.and_literal_in(sentence, literal);
        Ok(())
    }

    /// Conjoin another sentence to the sentence.
    pub fn and_sentence<P: Phrase>(
        self,
        sentence: &mut Sentence<P>,
        other: &Sentence<P>,
        config: &Config,
    ) -> Result<(), MutationError> {
        sentence.guard()?;
        self.and_sentence_in(sentence, other, config);
        Ok(())
    }

    /// Disjoin a literal to the sentence.
    pub fn or_literal<P: Phrase>(
        self,
        sentence: &mut Sentence<P>,
        literal: P::Literal,
    ) -> Result<(), MutationError> {
        sentence.guard()?;
        self.or_literal_in(sentence, literal);
        Ok(())
    }

    /// Disjoin another sentence to the sentence.
    pub fn or_sentence<P: Phrase>(
        self,
        sentence: &mut Sentence<P>,
        other: &Sentence<P>,
        config: &Config,
    ) -> Result<(), MutationError> {
        sentence.guard()?;
        self.or_sentence_in(sentence, other, config);
        Ok(())
    }

    pub(crate) fn and_literal_in<P: Phrase>(self, sentence: &mut Sentence<P>, literal: P::Literal) {
        match self {
            Self::Disjunctive => sentence.append_literal(literal),
            Self::Conjunctive => {
                sentence.add_singleton(Some(literal));
            }
        }
    }

    pub(crate) fn and_sentence_in<P: Phrase>(
        self,
        sentence: &mut Sentence<P>,
        other: &Sentence<P>,
        config: &Config,
    ) {
        match self {
            Self::Disjunctive => sentence.cross_into(other, config),
            Self::Conjunctive => sentence.merge_in(other, config),
        }
    }

    pub(crate) fn or_literal_in<P: Phrase>(self, sentence: &mut Sentence<P>, literal: P::Literal) {
        match self {
            Self::Disjunctive => {
                sentence.add_singleton(Some(literal));
            }
            Self::Conjunctive => sentence.append_literal(literal),
        }
    }

    pub(crate) fn or_sentence_in<P: Phrase>(
        self,
        sentence: &mut Sentence<P>,
        other: &Sentence<P>,
        config: &Config,
    ) {
        match self {
            Self::Disjunctive => sentence.merge_in(other, config),
            Self::Conjunctive => sentence.cross_into(other, config),
        }
    }

    // A single empty phrase, i.e. the absorbing unit of merge.
    fn is_unit_set<P: Phrase>(phrases: &HashSet<P>) -> bool {
        phrases.len() == 1 && phrases.iter().all(|phrase| phrase.is_empty())
    }
}
