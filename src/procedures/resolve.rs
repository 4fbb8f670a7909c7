/*!
Substitution: replacing literals with literals, or with whole sentences.

Both operations make exactly one pass.
A literal introduced by a substitution is never itself substituted in the same call, even when it appears as a key of the map --- replacements are gathered to the side and only folded in at the end.
Repeated calls are the way to run a substitution to a fixed point.

Resolution is how placeholder atoms are given meaning: each mapped literal of a phrase is removed and its expansion crossed into an aggregate, the unsubstituted residue of the phrase is crossed in last, and the per-phrase aggregates are merged back once at the end.
*/

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};

use crate::config::Config;
use crate::misc::log::targets;
use crate::structures::phrase::Phrase;
use crate::structures::sentence::Sentence;
use crate::types::err::MutationError;

/// Above this many map entries, two-literal phrases are resolved by direct lookup of
/// both literals rather than by iterating the map.
pub const PAIR_RESOLUTION_MAP_LIMIT: usize = 1500;

impl<P: Phrase> Sentence<P> {
    /// Replace every occurrence of each key of `replacements` with its value, in one pass.
    ///
    /// Returns whether any replacement was applied.
    pub fn replace_all(
        &mut self,
        replacements: &HashMap<P::Literal, P::Literal>,
    ) -> Result<bool, MutationError> {
        self.guard()?;
        Ok(self.replace_all_in(replacements))
    }

    /// Replace every occurrence of `from` with `to`.
    pub fn replace(&mut self, from: P::Literal, to: P::Literal) -> Result<bool, MutationError> {
        let mut replacements = HashMap::with_capacity(1);
        replacements.insert(from, to);
        self.replace_all(&replacements)
    }

    /// Resolve every occurrence of each key of `resolutions` to its sentence, in one pass.
    ///
    /// Values are taken through [Borrow], so the map may hold sentences or references to them.
    /// Returns whether any resolution was applied --- including resolutions to the structurally
    /// empty sentence, which only remove phrases.
    pub fn resolve_all<B: Borrow<Self>>(
        &mut self,
        resolutions: &HashMap<P::Literal, B>,
        config: &Config,
    ) -> Result<bool, MutationError> {
        self.guard()?;
        Ok(self.resolve_all_in(resolutions, config))
    }

    /// Resolve every occurrence of `placeholder` to `expansion`.
    pub fn resolve(
        &mut self,
        placeholder: P::Literal,
        expansion: &Self,
        config: &Config,
    ) -> Result<bool, MutationError> {
        let mut resolutions = HashMap::with_capacity(1);
        resolutions.insert(placeholder, expansion);
        self.resolve_all(&resolutions, config)
    }

    fn replace_all_in(&mut self, replacements: &HashMap<P::Literal, P::Literal>) -> bool {
        if replacements.is_empty() || self.phrases.is_empty() {
            return false;
        }

        if self.phrases.len() == 1 {
            match self.sole_phrase_shape() {
                SoleShape::Empty => return false,

                SoleShape::Single(literal) => {
                    return match replacements.get(&literal) {
                        None => false,
                        Some(&replacement) => {
                            self.phrases.clear();
                            self.phrases.insert(P::singleton(Some(replacement)));
                            true
                        }
                    };
                }

                SoleShape::Larger => {}
            }
        }

        // Element-for-element replacement never grows a phrase, so updated phrases can
        // wait in a plain list --- absorption checks happen once, on re-adding.
        let mut kept: HashSet<P> = HashSet::with_capacity(self.phrases.len());
        let mut updated: Vec<P> = Vec::new();

        let drained: Vec<P> = self.phrases.drain().collect();
        for mut phrase in drained {
            let mut remaining = phrase.cardinality();

            if remaining == 1 {
                // Single literal: direct lookup beats iterating the map.
                let literal = match phrase.min_literal() {
                    Some(literal) => literal,
                    None => continue,
                };
                match replacements.get(&literal) {
                    Some(&replacement) => {
                        phrase.remove(literal);
                        phrase.insert(replacement);
                        updated.push(phrase);
                    }
                    None => {
                        kept.insert(phrase);
                    }
                }
                continue;
            }

            // Replacement values rest in a side phrase until the pass over the map is
            // done, so a value equal to a later key is not replaced twice.
            let mut additions = P::empty();
            let mut touched = false;
            for (&key, &value) in replacements {
                if phrase.contains(key) {
                    touched = true;
                    phrase.remove(key);
                    remaining -= 1;
                    additions.insert(value);

                    if remaining == 1 {
                        // Down to one literal: finish by lookup and stop iterating.
                        if let Some(last) = phrase.min_literal() {
                            if let Some(&replacement) = replacements.get(&last) {
                                phrase.remove(last);
                                additions.insert(replacement);
                            }
                        }
                        break;
                    }
                }
            }

            if touched {
                phrase.union_with(&additions);
                updated.push(phrase);
            } else {
                kept.insert(phrase);
            }
        }

        self.phrases = kept;
        let applied = !updated.is_empty();
        for phrase in updated {
            self.absorb_in(phrase);
        }
        applied
    }

    fn resolve_all_in<B: Borrow<Self>>(
        &mut self,
        resolutions: &HashMap<P::Literal, B>,
        config: &Config,
    ) -> bool {
        if resolutions.is_empty() || self.phrases.is_empty() {
            return false;
        }

        if self.phrases.len() == 1 {
            match self.sole_phrase_shape() {
                SoleShape::Empty => return false,

                SoleShape::Single(literal) => {
                    return match resolutions.get(&literal) {
                        None => false,
                        Some(expansion) => {
                            self.phrases.clear();
                            self.merge_in(expansion.borrow(), config);
                            true
                        }
                    };
                }

                SoleShape::Larger => {}
            }
        }

        log::trace!(
            target: targets::RESOLVE,
            "Resolving {} phrases against {} mappings",
            self.phrases.len(),
            resolutions.len()
        );

        let rules = self.rules();
        let mut kept: HashSet<P> = HashSet::with_capacity(self.phrases.len());
        let mut gathered = Sentence::empty(rules);
        let mut applied = false;

        let drained: Vec<P> = self.phrases.drain().collect();
        for mut phrase in drained {
            let mut remaining = phrase.cardinality();

            if remaining == 1 {
                match phrase.min_literal().and_then(|literal| resolutions.get(&literal)) {
                    Some(expansion) => {
                        applied = true;
                        gathered.merge_in(expansion.borrow(), config);
                    }
                    None => {
                        kept.insert(phrase);
                    }
                }
                continue;
            }

            if remaining == 2 && resolutions.len() > PAIR_RESOLUTION_MAP_LIMIT {
                // Two lookups beat a pass over a large map.
                let (first, second) = {
                    let mut literals = phrase.literals();
                    (literals.next(), literals.next())
                };
                let (first, second) = match (first, second) {
                    (Some(first), Some(second)) => (first, second),
                    _ => continue,
                };

                let first_expansion = resolutions.get(&first);
                let second_expansion = resolutions.get(&second);
                if first_expansion.is_none() && second_expansion.is_none() {
                    kept.insert(phrase);
                    continue;
                }

                applied = true;
                let mut aggregate = Sentence::from_phrase(rules, P::empty());
                match first_expansion {
                    Some(expansion) => aggregate.cross_into(expansion.borrow(), config),
                    None => aggregate.append_literal(first),
                }
                match second_expansion {
                    Some(expansion) => aggregate.cross_into(expansion.borrow(), config),
                    None => aggregate.append_literal(second),
                }
                gathered.merge_in(&aggregate, config);
                continue;
            }

            let mut touched = false;
            let mut aggregate = Sentence::from_phrase(rules, P::empty());
            for (&key, expansion) in resolutions {
                if phrase.contains(key) {
                    touched = true;
                    phrase.remove(key);
                    remaining -= 1;
                    aggregate.cross_into(expansion.borrow(), config);

                    if remaining == 1 {
                        // Down to one literal: finish by lookup and stop iterating.
                        if let Some(last) = phrase.min_literal() {
                            if let Some(expansion) = resolutions.get(&last) {
                                phrase.remove(last);
                                aggregate.cross_into(expansion.borrow(), config);
                            }
                        }
                        break;
                    }
                }
            }

            if touched {
                applied = true;
                // The unsubstituted residue of the phrase, possibly empty.
                aggregate.cross_phrase_in(&phrase);
                gathered.merge_in(&aggregate, config);
            } else {
                kept.insert(phrase);
            }
        }

        self.phrases = kept;
        self.merge_in(&gathered, config);
        applied
    }

    // The one-phrase fast-path discriminant, read without holding a borrow.
    fn sole_phrase_shape(&self) -> SoleShape<P::Literal> {
        match self.phrases.iter().next() {
            None => SoleShape::Empty,
            Some(only) => match only.cardinality() {
                0 => SoleShape::Empty,
                1 => match only.min_literal() {
                    Some(literal) => SoleShape::Single(literal),
                    None => SoleShape::Empty,
                },
                _ => SoleShape::Larger,
            },
        }
    }
}

enum SoleShape<L> {
    /// No phrase, or the empty phrase: nothing to substitute.
    Empty,
    /// A single phrase of a single literal.
    Single(L),
    /// A single phrase of several literals.
    Larger,
}
