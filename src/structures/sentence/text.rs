//! Sentences as text.
//!
//! A sentence is written as its phrases separated by an outer connective, each phrase its literals separated by an inner connective between a wrap pair:
//!
//! ```text
//! (1&2)|(1&3)      --- standard disjunctive connectives
//! 1&2,1&3          --- csv disjunctive connectives
//! ```
//!
//! When the wrap pair is empty (the csv connectives) the true and false sentences collapse to the same empty string, so reading rejects empty segments rather than guessing.
//!
//! [Display](std::fmt::Display) wraps the standard form of the active rules in angle brackets, e.g. `<(1&2)|(3)>`, with phrases ordered by [phrase_order].

use std::fmt;

use super::{Rules, Sentence};
use crate::generic::ordering::phrase_order;
use crate::misc::log::targets;
use crate::structures::phrase::Phrase;
use crate::types::err::{self};

/// The strings marking phrase boundaries and separating literals and phrases.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Connectives {
    /// Marks the start of a phrase. If this and `phrase_end` are both empty, the true and false sentences are indistinguishable in text.
    pub phrase_begin: &'static str,

    /// Marks the end of a phrase.
    pub phrase_end: &'static str,

    /// Separates literals within a phrase.
    pub inner: &'static str,

    /// Separates phrases.
    pub outer: &'static str,
}

impl Connectives {
    /// Rules-neutral connectives: `(1+2)-(3)`.
    pub const DEFAULT: Connectives = Connectives {
        phrase_begin: "(",
        phrase_end: ")",
        inner: "+",
        outer: "-",
    };

    /// Standard disjunctive connectives: `(1&2)|(3)`.
    pub const DISJUNCTIVE_STD: Connectives = Connectives {
        phrase_begin: "(",
        phrase_end: ")",
        inner: "&",
        outer: "|",
    };

    /// Comma-separated disjunctive connectives: `1&2,3`.
    pub const DISJUNCTIVE_CSV: Connectives = Connectives {
        phrase_begin: "",
        phrase_end: "",
        inner: "&",
        outer: ",",
    };

    /// Standard conjunctive connectives: `(1|2)&(3)`.
    pub const CONJUNCTIVE_STD: Connectives = Connectives {
        phrase_begin: "(",
        phrase_end: ")",
        inner: "|",
        outer: "&",
    };

    /// Comma-separated conjunctive connectives: `1|2,3`.
    pub const CONJUNCTIVE_CSV: Connectives = Connectives {
        phrase_begin: "",
        phrase_end: "",
        inner: "|",
        outer: ",",
    };

    /// The standard connectives of the given rules.
    pub fn standard(rules: Rules) -> Connectives {
        match rules {
            Rules::Disjunctive => Self::DISJUNCTIVE_STD,
            Rules::Conjunctive => Self::CONJUNCTIVE_STD,
        }
    }

    /// The comma-separated connectives of the given rules.
    pub fn csv(rules: Rules) -> Connectives {
        match rules {
            Rules::Disjunctive => Self::DISJUNCTIVE_CSV,
            Rules::Conjunctive => Self::CONJUNCTIVE_CSV,
        }
    }
}

impl<P: Phrase> Sentence<P> {
    /// The sentence as text under the given connectives, with the phrases optionally ordered by [phrase_order].
    pub fn as_text(&self, connectives: &Connectives, sorted: bool) -> String {
        let mut ordered: Vec<&P> = self.phrases.iter().collect();
        if sorted {
            ordered.sort_by(|a, b| phrase_order(*a, *b));
        }

        let mut text = String::default();
        let mut phrases = ordered.iter().peekable();
        while let Some(phrase) = phrases.next() {
            text.push_str(connectives.phrase_begin);

            let mut literals = phrase.literals().peekable();
            while let Some(literal) = literals.next() {
                text.push_str(&literal.to_string());
                if literals.peek().is_some() {
                    text.push_str(connectives.inner);
                }
            }

            text.push_str(connectives.phrase_end);
            if phrases.peek().is_some() {
                text.push_str(connectives.outer);
            }
        }
        text
    }

    /// The sorted standard form of the sentence's rules, in angle brackets.
    pub fn canonical_text(&self) -> String {
        format!("<{}>", self.as_text(&Connectives::standard(self.rules), true))
    }

    /// The sorted comma-separated form of the sentence's rules.
    pub fn csv_text(&self) -> String {
        self.as_text(&Connectives::csv(self.rules), true)
    }

    /// Clear the sentence and rebuild it from the given text.
    ///
    /// On an error the sentence is left empty, never partially read.
    pub fn read_text(&mut self, text: &str, connectives: &Connectives) -> Result<(), err::ErrorKind> {
        self.guard()?;
        self.phrases.clear();

        // Splitting the empty string yields one empty segment, so the false sentence is handled up front.
        if text.is_empty() {
            return Ok(());
        }

        let result = self.read_segments(text, connectives);
        if result.is_err() {
            self.phrases.clear();
        }
        result
    }

    fn read_segments(&mut self, text: &str, connectives: &Connectives) -> Result<(), err::ErrorKind> {
        let bare = connectives.phrase_begin.is_empty() && connectives.phrase_end.is_empty();

        for segment in text.split(connectives.outer) {
            if segment.is_empty() {
                if bare {
                    return Err(err::FormatError::StraySeparator.into());
                }
                // With wrappers present an empty segment is an artefact of adjacent separators, tolerated.
                continue;
            }

            let segment = match segment.strip_prefix(connectives.phrase_begin) {
                Some(rest) => rest,
                None => return Err(err::FormatError::PhraseBegin(segment.to_owned()).into()),
            };
            let segment = match segment.strip_suffix(connectives.phrase_end) {
                Some(rest) => rest,
                None => return Err(err::FormatError::PhraseEnd(segment.to_owned()).into()),
            };

            let mut phrase = P::empty();
            for literal_text in segment.split(connectives.inner) {
                // The empty-string sentinel covers stray inner connectives, e.g. "(2&&5)".
                if let Some(literal) = P::parse_literal(literal_text)? {
                    phrase.insert(literal);
                }
            }

            self.absorb_in(phrase);
        }

        log::trace!(target: targets::TEXT, "Read {} phrases", self.phrases.len());
        Ok(())
    }

    /// A sentence read from text under the given connectives.
    pub fn from_text(
        rules: Rules,
        text: &str,
        connectives: &Connectives,
    ) -> Result<Self, err::ErrorKind> {
        let mut sentence = Self::empty(rules);
        sentence.read_text(text, connectives)?;
        Ok(sentence)
    }

    /// A sentence read from the angle-bracketed standard form written by [canonical_text](Self::canonical_text) and [Display](std::fmt::Display).
    pub fn from_canonical_text(rules: Rules, text: &str) -> Result<Self, err::ErrorKind> {
        let inner = match text.strip_prefix('<') {
            Some(rest) => rest,
            None => return Err(err::FormatError::SentenceBegin(text.to_owned()).into()),
        };
        let inner = match inner.strip_suffix('>') {
            Some(rest) => rest,
            None => return Err(err::FormatError::SentenceEnd(text.to_owned()).into()),
        };

        Self::from_text(rules, inner, &Connectives::standard(rules))
    }
}

impl<P: Phrase> fmt::Display for Sentence<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_text())
    }
}
