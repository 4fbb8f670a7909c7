/*!
Placeholder extraction: compressing the parts of a sentence that do not mention a preserved atom.

Each phrase is split against a preserve set.
Phrases with no preserved atom are gathered into one sentence and replaced, as a whole, by a single fresh placeholder.
Phrases with a preserved residue are grouped by that residue --- A∧B ∨ A∧C becomes A∧Z with Z standing for B∨C --- so repeated residues share one placeholder.
Placeholders come from a [Numberer], and resolving a placeholder back is ordinary [resolution](crate::procedures::resolve).

Extraction is only offered on the sparse backend: a bounded domain has nowhere to mint placeholders.
*/

use std::collections::{HashMap, HashSet};

use crate::config::Config;
use crate::generic::numberer::Numberer;
use crate::misc::log::targets;
use crate::structures::atom::Atom;
use crate::structures::phrase::{Phrase, SparsePhrase};
use crate::structures::sentence::Sentence;
use crate::types::err::MutationError;

impl Sentence<SparsePhrase> {
    /// Extract the subpaths mentioning no atom of `preserve`, replacing each extracted
    /// sentence with a placeholder minted by `extractions`.
    ///
    /// A phrase whose atoms are all preserved stands unchanged.
    /// With `skip_trivial`, an extraction of a single literal keeps that literal in
    /// place of a placeholder, as numbering it would not shrink the sentence.
    pub fn extract_irrelevant_subpaths(
        &mut self,
        preserve: &HashSet<Atom>,
        extractions: &mut impl Numberer<Sentence<SparsePhrase>>,
        skip_trivial: bool,
        config: &Config,
    ) -> Result<(), MutationError> {
        self.guard()?;

        let rules = self.rules();
        let drained: Vec<SparsePhrase> = self.phrases.drain().collect();

        // Phrases with no preserved atom, aggregated behind one placeholder.
        let mut removed_phrases = Sentence::empty(rules);

        // Partially relevant phrases, grouped by preserved residue.
        let mut residue_chunks: HashMap<SparsePhrase, Sentence<SparsePhrase>> = HashMap::default();

        for mut phrase in drained {
            let mut irrelevant = SparsePhrase::empty();
            for literal in phrase.literals().collect::<Vec<_>>() {
                if !preserve.contains(&literal) {
                    phrase.remove(literal);
                    irrelevant.insert(literal);
                }
            }

            if phrase.is_empty() {
                removed_phrases.absorb_in(irrelevant);
            } else if irrelevant.is_empty() {
                // Fully relevant, and the drained phrases were mutually absorption-free.
                self.phrases.insert(phrase);
            } else {
                let chunk = Sentence::from_phrase(rules, irrelevant);
                residue_chunks
                    .entry(phrase)
                    .and_modify(|existing| existing.merge_in(&chunk, config))
                    .or_insert(chunk);
            }
        }

        for (mut residue, chunks) in residue_chunks {
            let placeholder = if skip_trivial && chunks.literal_count_equals(1) {
                match chunks.all_literals().into_iter().next() {
                    Some(literal) => literal,
                    None => continue,
                }
            } else {
                extractions.number_of(chunks)
            };
            residue.insert(placeholder);
            self.absorb_in(residue);
        }

        if !removed_phrases.is_empty() {
            let placeholder = if skip_trivial && removed_phrases.literal_count_equals(1) {
                removed_phrases.all_literals().into_iter().next()
            } else {
                Some(extractions.number_of(removed_phrases))
            };
            if let Some(placeholder) = placeholder {
                self.absorb_in(SparsePhrase::singleton(Some(placeholder)));
            }
        }

        log::trace!(
            target: targets::EXTRACT,
            "Extraction left {} phrases; next placeholder {}",
            self.phrases.len(),
            extractions.next_available()
        );
        Ok(())
    }
}
