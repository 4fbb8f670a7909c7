//! Key structures, such as atoms, phrases, and sentences.
//!
//! Phrases are made of a trait to capture the key features of the structure together with backing implementations, one per literal domain.
//! Use of the trait or a particular backend within the library is situational.
//!
//! # Other structures without a trait and/or canonical implementation.
//!
//! ## Sentences
//!
//!  A sentence is a set of [phrases](phrase), interpreted through its [rules](sentence::Rules):
//!  under disjunctive rules a phrase is a conjunction and the sentence the disjunction of its phrases, and under conjunctive rules the duals.
//!
//!  Every sentence maintained by the library is minimal under the absorption law --- no phrase is a subset of another phrase of the same sentence.
//!
//! ## Truth and falsity
//!
//! Structural truth and falsity are read through the rules of a sentence, not from the phrase set alone. \
//! Under disjunctive rules the empty sentence is false and the sentence of one empty phrase is true, and under conjunctive rules the two swap.

pub mod atom;
pub mod phrase;
pub mod sentence;
