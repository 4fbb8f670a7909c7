//! Sentences, aka. sets of phrases interpreted through connective rules.
//!
//! A sentence owns its phrases, is minimal under the absorption law at every public boundary, and reads conjunction and disjunction through its [Rules].
//!
//! ```rust
//! # use boolnf::config::Config;
//! # use boolnf::structures::phrase::DensePhrase;
//! # use boolnf::structures::sentence::{Rules, Sentence};
//! let config = Config::default();
//!
//! let mut sentence: Sentence<DensePhrase> = Sentence::from_literal(Rules::Disjunctive, 1);
//! sentence.and_literal(2)?;
//! sentence.or_sentence(&Sentence::and_literals(Rules::Disjunctive, [1, 2, 3]), &config)?;
//!
//! // (1 ∧ 2) ∨ (1 ∧ 2 ∧ 3) collapses by absorption.
//! assert_eq!(sentence.phrase_count(), 1);
//! # Ok::<(), boolnf::types::err::MutationError>(())
//! ```
//!
//! # Freezing
//!
//! A sentence is either mutable for life or frozen for life.
//! Frozen sentences are made by deep copy ([duplicate](Sentence::duplicate) or [frozen_clone](Sentence::frozen_clone)), and every mutating operation checks [guard](Sentence::guard) before touching state, so a frozen sentence can be shared as a fixed value.
//!
//! # Equality and hashing
//!
//! Two sentences are equal when they hold the same rules and the same phrases.
//! Hashing combines per-phrase hashes with a wrapping sum, so it is independent of iteration order, and a sentence may key a map --- e.g. the maps a [Numberer](crate::generic::numberer::Numberer) keeps.

use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::config::Config;
use crate::structures::phrase::Phrase;
use crate::types::err::MutationError;

mod rules;
pub mod text;
pub use rules::Rules;
pub use text::Connectives;

/// A set of phrases, minimal under absorption, interpreted through [Rules].
#[derive(Clone, Debug)]
pub struct Sentence<P: Phrase> {
    /// The connective rules the sentence is read through.
    rules: Rules,

    /// Whether the sentence rejects mutation.
    frozen: bool,

    /// The phrases of the sentence.
    pub(crate) phrases: HashSet<P>,
}

impl<P: Phrase> PartialEq for Sentence<P> {
    /// Sentences are compared on rules and phrases; whether either is frozen does not matter.
    fn eq(&self, other: &Self) -> bool {
        self.rules == other.rules && self.phrases == other.phrases
    }
}

impl<P: Phrase> Eq for Sentence<P> {}

impl<P: Phrase> Hash for Sentence<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rules.hash(state);

        // Phrase iteration order varies, so per-phrase hashes are folded with a wrapping sum.
        let mut combined: u64 = 0;
        for phrase in &self.phrases {
            let mut hasher = DefaultHasher::new();
            phrase.hash(&mut hasher);
            combined = combined.wrapping_add(hasher.finish());
        }
        combined.hash(state);
    }
}

// Construction
impl<P: Phrase> Sentence<P> {
    /// The sentence of no phrases.
    pub fn empty(rules: Rules) -> Self {
        Sentence {
            rules,
            frozen: false,
            phrases: HashSet::default(),
        }
    }

    /// The sentence of a single phrase.
    pub fn from_phrase(rules: Rules, phrase: P) -> Self {
        let mut sentence = Self::empty(rules);
        sentence.phrases.insert(phrase);
        sentence
    }

    /// The sentence of a single one-literal phrase.
    pub fn from_literal(rules: Rules, literal: P::Literal) -> Self {
        Self::from_phrase(rules, P::singleton(Some(literal)))
    }

    /// The structurally false sentence under the given rules.
    pub fn false_sentence(rules: Rules) -> Self {
        let mut sentence = Self::empty(rules);
        rules.make_false(&mut sentence.phrases);
        sentence
    }

    /// The structurally true sentence under the given rules.
    pub fn true_sentence(rules: Rules) -> Self {
        let mut sentence = Self::empty(rules);
        rules.make_true(&mut sentence.phrases);
        sentence
    }

    /// The conjunction of the given literals.
    ///
    /// With no literals this is the empty conjunction, i.e. the structurally true sentence.
    pub fn and_literals(rules: Rules, literals: impl IntoIterator<Item = P::Literal>) -> Self {
        match rules {
            Rules::Disjunctive => Self::from_phrase(rules, P::from_literals(literals)),
            Rules::Conjunctive => Self::of_singletons(rules, literals),
        }
    }

    /// The disjunction of the given literals.
    ///
    /// With no literals this is the empty disjunction, i.e. the structurally false sentence.
    pub fn or_literals(rules: Rules, literals: impl IntoIterator<Item = P::Literal>) -> Self {
        match rules {
            Rules::Disjunctive => Self::of_singletons(rules, literals),
            Rules::Conjunctive => Self::from_phrase(rules, P::from_literals(literals)),
        }
    }

    /// The conjunction of two sentences, leaving both untouched.
    pub fn and_of(a: &Self, b: &Self, config: &Config) -> Self {
        let mut conjunction = a.duplicate(false);
        a.rules.and_sentence_in(&mut conjunction, b, config);
        conjunction
    }

    /// The disjunction of two sentences, leaving both untouched.
    pub fn or_of(a: &Self, b: &Self, config: &Config) -> Self {
        let mut disjunction = a.duplicate(false);
        a.rules.or_sentence_in(&mut disjunction, b, config);
        disjunction
    }

    /// A deep copy, mutable or frozen as requested.
    pub fn duplicate(&self, frozen: bool) -> Self {
        Sentence {
            rules: self.rules,
            frozen,
            phrases: self.phrases.clone(),
        }
    }

    /// A frozen deep copy.
    pub fn frozen_clone(&self) -> Self {
        self.duplicate(true)
    }

    // One singleton phrase per literal. Distinct singletons never absorb each other.
    fn of_singletons(rules: Rules, literals: impl IntoIterator<Item = P::Literal>) -> Self {
        let mut sentence = Self::empty(rules);
        for literal in literals {
            sentence.phrases.insert(P::singleton(Some(literal)));
        }
        sentence
    }
}

// Queries
impl<P: Phrase> Sentence<P> {
    /// The rules the sentence is read through.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Whether the sentence rejects mutation.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Ok, or the error every mutating operation returns on a frozen sentence.
    pub fn guard(&self) -> Result<(), MutationError> {
        match self.frozen {
            false => Ok(()),
            true => Err(MutationError::Frozen),
        }
    }

    /// Whether the sentence holds no phrases.
    ///
    /// Note: which of true/false this means depends on the rules --- see [is_false](Self::is_false) and [is_true](Self::is_true).
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Whether the sentence is structurally false under its rules.
    pub fn is_false(&self) -> bool {
        self.rules.is_false(&self.phrases)
    }

    /// Whether the sentence is structurally true under its rules.
    pub fn is_true(&self) -> bool {
        self.rules.is_true(&self.phrases)
    }

    /// Whether the sentence is exactly the unit: a single empty phrase.
    pub fn is_unit(&self) -> bool {
        self.phrases.len() == 1 && self.phrases.iter().all(|phrase| phrase.is_empty())
    }

    /// The number of phrases.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// An iterator over the phrases, in no particular order.
    pub fn phrases(&self) -> impl Iterator<Item = &P> + '_ {
        self.phrases.iter()
    }

    /// The number of literals, counted with multiplicity across phrases.
    pub fn literal_count(&self) -> usize {
        self.phrases.iter().map(|phrase| phrase.cardinality()).sum()
    }

    /// Whether [literal_count](Self::literal_count) equals `expected`, without a full count when it does not.
    pub fn literal_count_equals(&self, expected: usize) -> bool {
        let mut remaining = expected;
        for phrase in &self.phrases {
            let cardinality = phrase.cardinality();
            if cardinality > remaining {
                return false;
            }
            remaining -= cardinality;
        }
        remaining == 0
    }

    /// The set of distinct literals appearing in some phrase.
    pub fn all_literals(&self) -> HashSet<P::Literal> {
        let mut literals = HashSet::default();
        for phrase in &self.phrases {
            phrase.collect_into(&mut literals);
        }
        literals
    }

    /// Whether some phrase contains the literal.
    pub fn contains_literal(&self, literal: P::Literal) -> bool {
        self.phrases.iter().any(|phrase| phrase.contains(literal))
    }

    /// An iterator over the phrases containing the literal.
    pub fn phrases_containing(&self, literal: P::Literal) -> impl Iterator<Item = &P> + '_ {
        self.phrases.iter().filter(move |phrase| phrase.contains(literal))
    }

    /// A one-line size summary: literal count (with multiplicity), distinct literal count, phrase count.
    pub fn stats(&self, csv: bool) -> String {
        let (n, u, p) = (self.literal_count(), self.all_literals().len(), self.phrase_count());
        match csv {
            true => format!("{n},{u},{p}"),
            false => format!("{{n={n}; u={u}; p={p}}}"),
        }
    }
}

// The chainable algebra
impl<P: Phrase> Sentence<P> {
    /// Conjoin a literal, in place.
    pub fn and_literal(&mut self, literal: P::Literal) -> Result<&mut Self, MutationError> {
        let rules = self.rules;
        rules.and_literal(self, literal)?;
        Ok(self)
    }

    /// Conjoin another sentence, in place.
    pub fn and_sentence(&mut self, other: &Self, config: &Config) -> Result<&mut Self, MutationError> {
        let rules = self.rules;
        rules.and_sentence(self, other, config)?;
        Ok(self)
    }

    /// Disjoin a literal, in place.
    pub fn or_literal(&mut self, literal: P::Literal) -> Result<&mut Self, MutationError> {
        let rules = self.rules;
        rules.or_literal(self, literal)?;
        Ok(self)
    }

    /// Disjoin another sentence, in place.
    pub fn or_sentence(&mut self, other: &Self, config: &Config) -> Result<&mut Self, MutationError> {
        let rules = self.rules;
        rules.or_sentence(self, other, config)?;
        Ok(self)
    }

    /// Collapse to the structurally false sentence.
    pub fn set_false(&mut self) -> Result<&mut Self, MutationError> {
        self.guard()?;
        let rules = self.rules;
        rules.make_false(&mut self.phrases);
        Ok(self)
    }

    /// Collapse to the structurally true sentence.
    pub fn set_true(&mut self) -> Result<&mut Self, MutationError> {
        self.guard()?;
        let rules = self.rules;
        rules.make_true(&mut self.phrases);
        Ok(self)
    }
}
