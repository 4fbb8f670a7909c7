//! A library for maintaining boolean formulas in disjunctive or conjunctive normal form.
//!
//! boolnf keeps a formula as a set of phrases --- sets of atoms --- minimal under the absorption law, and supports building the formula up algebraically, renaming atoms, and resolving placeholder atoms to whole sub-formulas.
//!
//! The intended use is formulas which are accumulated rather than solved: path conditions, reachability constraints, coverage predicates, and the like, where the formula passes through many combining operations and minimality at each step is what keeps the representation workable.
//! There is deliberately no satisfiability machinery here --- minimality is syntactic, by absorption alone.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [sentence](structures::sentence).
//!
//! Sentences are built from [phrases](structures::phrase) and read through connective [rules](structures::sentence::Rules):
//! disjunctive rules make a sentence a disjunction of conjunctions (DNF), conjunctive rules the dual (CNF).
//! The rules fix how conjoining and disjoining map onto the three engine primitives --- [adding a phrase under absorption](structures::sentence::Sentence::add_phrase_absorbing), [merging](structures::sentence::Sentence::merge), and [crossing](structures::sentence::Sentence::cross_sentence) --- so every algorithm is written once and shared by both forms.
//!
//! Two phrase backends are provided:
//! - [DensePhrase](structures::phrase::DensePhrase), one machine word over atoms `0..64`.
//! - [SparsePhrase](structures::phrase::SparsePhrase), an ordered set over all of [Atom](structures::atom::Atom), with support for [placeholder extraction](structures::sentence::Sentence::extract_irrelevant_subpaths).
//!
//! Useful starting points, then, may be:
//! - The [sentence module](structures::sentence) for construction, queries, and the algebra.
//! - The [procedures] to inspect the algorithms a sentence is maintained by.
//! - The [configuration](config) for the scheduling of large merges.
//!
//! # Examples
//!
//! + Absorption at work while a formula is built.
//!
//! ```rust
//! # use boolnf::config::Config;
//! # use boolnf::structures::phrase::DensePhrase;
//! use boolnf::structures::sentence::{Rules, Sentence};
//!
//! let config = Config::default();
//!
//! let mut formula: Sentence<DensePhrase> = Sentence::and_literals(Rules::Disjunctive, [1, 2]);
//! let longer = Sentence::and_literals(Rules::Disjunctive, [1, 2, 3]);
//! formula.or_sentence(&longer, &config)?;
//!
//! // (1 ∧ 2) absorbs (1 ∧ 2 ∧ 3).
//! assert_eq!(formula.phrase_count(), 1);
//! assert_eq!(formula.canonical_text(), "<(1&2)>");
//! # Ok::<(), boolnf::types::err::MutationError>(())
//! ```
//!
//! + A placeholder atom resolved to its expansion.
//!
//! ```rust
//! # use boolnf::config::Config;
//! # use boolnf::structures::phrase::SparsePhrase;
//! use boolnf::structures::sentence::{Rules, Sentence};
//!
//! let config = Config::default();
//!
//! let mut paths: Sentence<SparsePhrase> = Sentence::from_literal(Rules::Disjunctive, 9);
//! let expansion = Sentence::or_literals(Rules::Disjunctive, [1, 2]);
//! paths.resolve(9, &expansion, &config)?;
//!
//! assert_eq!(paths.canonical_text(), "<(1)|(2)>");
//! # Ok::<(), boolnf::types::err::MutationError>(())
//! ```
//!
//! # Guiding principles
//!
//! ## Minimality as an invariant
//!
//! + No phrase of a sentence is a subset of another phrase of the same sentence, at every public boundary.
//!   The [absorption procedures](procedures::absorption) note, for each addition, the partition of phrases that cannot be absorbed and check only the remainder.
//!
//! ## Explicit scheduling
//!
//! + The only concurrency is inside a large [merge](structures::sentence::Sentence::merge): scoped workers over disjoint ranges of the incoming phrases, joined before the call returns.
//!   Whether a merge goes multi-threaded is decided by a [cost model](config::Config) whose knobs are scheduling parameters, never semantics.
//!
//! ## Ownership of phrases
//!
//! + A sentence owns its phrases outright.
//!   Operations reading another sentence clone any phrase they keep, so no two sentences ever share a phrase, and a [frozen](structures::sentence::Sentence::frozen_clone) sentence stays fixed whatever happens to its source.
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made at the decision points of the library, and a variety of targets are defined in order to help narrow output to relevant parts.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs on whether merges go multi-threaded can be filtered with `RUST_LOG=merge …`
//! - Logs related to substitution can be found with `RUST_LOG=resolve …`

pub mod procedures;

pub mod config;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;
