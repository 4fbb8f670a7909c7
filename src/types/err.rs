//! Error types used in the library.
//!
//! - Mutation errors are external --- a caller holding a frozen sentence asked for a change, and the sentence is untouched.
//! - Format and literal errors surface during reading a sentence from text.
//!   As the sentence under construction is cleared before reading begins, these leave the sentence empty rather than partially read.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding operations.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Mutation(MutationError),
    Format(FormatError),
    Literal(LiteralError),
}

/// Noted errors from attempts to mutate a sentence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MutationError {
    /// The sentence is frozen, and rejects every mutation.
    ///
    /// Frozen sentences are only created by deep copy, so a mutable copy is always available via [duplicate](crate::structures::sentence::Sentence::duplicate).
    Frozen,
}

impl From<MutationError> for ErrorKind {
    fn from(e: MutationError) -> Self {
        ErrorKind::Mutation(e)
    }
}

/// Noted errors in the shape of a sentence read from text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// A phrase did not open with the expected begin marker.
    PhraseBegin(String),

    /// A phrase did not close with the expected end marker.
    PhraseEnd(String),

    /// An empty segment between phrase separators, with no phrase wrappers to tell it apart from an empty phrase.
    StraySeparator,

    /// A canonical form did not open with `<`.
    SentenceBegin(String),

    /// A canonical form did not close with `>`.
    SentenceEnd(String),
}

impl From<FormatError> for ErrorKind {
    fn from(e: FormatError) -> Self {
        ErrorKind::Format(e)
    }
}

/// Noted errors from reading a literal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LiteralError {
    /// The text does not read as a literal.
    Unreadable(String),

    /// The text reads as a literal, though one outside the domain of the phrase backend.
    /// E.g., an atom of 64 or above for a dense phrase.
    OutOfDomain(String),
}

impl From<LiteralError> for ErrorKind {
    fn from(e: LiteralError) -> Self {
        ErrorKind::Literal(e)
    }
}
