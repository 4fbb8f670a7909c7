//! Various procedures for mutating a sentence.
//!
//! For the most part these are methods accessed via a sentence, and primarily placed here for documentation.

pub mod absorption;
pub mod cross;
pub mod extract;
pub mod merge;
pub mod resolve;
