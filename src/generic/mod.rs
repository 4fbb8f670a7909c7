//! Generic structures, independent of phrases and sentences.

pub mod numberer;
pub mod ordering;
