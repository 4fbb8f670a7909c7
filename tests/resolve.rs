use std::collections::{HashMap, HashSet};

use boolnf::{
    config::Config,
    generic::numberer::{Numberer, SequentialNumberer},
    structures::{
        phrase::{Phrase, SparsePhrase},
        sentence::{Rules, Sentence},
    },
};

fn sentence_of(phrases: &[&[u32]]) -> Sentence<SparsePhrase> {
    let mut sentence = Sentence::empty(Rules::Disjunctive);
    for literals in phrases {
        let _ = sentence
            .add_phrase_absorbing(SparsePhrase::from_literals(literals.iter().copied()))
            .expect("mutable");
    }
    sentence
}

mod replacement {

    use super::*;

    fn chained_map() -> HashMap<u32, u32> {
        HashMap::from([(1, 11), (11, 15), (0, 21), (21, 1)])
    }

    #[test]
    fn single_pass_never_chains() {
        // 1 maps to 11 and 11 maps onwards to 15, but one call applies one step.
        let mut a = sentence_of(&[&[1, 2, 3], &[1, 2, 4]]);
        assert!(a.replace_all(&chained_map()).expect("mutable"));
        assert_eq!(a.canonical_text(), "<(2&3&11)|(2&4&11)>");

        let mut b = sentence_of(&[&[0], &[1, 2, 3], &[1, 2, 4]]);
        assert!(b.replace_all(&chained_map()).expect("mutable"));
        assert_eq!(b.canonical_text(), "<(21)|(2&3&11)|(2&4&11)>");
    }

    #[test]
    fn single_phrase_fast_paths() {
        let mut unit_literal = sentence_of(&[&[1]]);
        assert!(unit_literal.replace_all(&chained_map()).expect("mutable"));
        assert_eq!(unit_literal.canonical_text(), "<(11)>");

        let mut unmapped = sentence_of(&[&[5]]);
        assert!(!unmapped.replace_all(&chained_map()).expect("mutable"));
        assert_eq!(unmapped.canonical_text(), "<(5)>");

        let mut unit_phrase: Sentence<SparsePhrase> = Sentence::true_sentence(Rules::Disjunctive);
        assert!(!unit_phrase.replace_all(&chained_map()).expect("mutable"));
        assert!(unit_phrase.is_true());
    }

    #[test]
    fn replacement_may_collapse_phrases() {
        let mut a = sentence_of(&[&[1, 2, 3], &[1, 2, 4]]);
        assert!(a.replace(3, 4).expect("mutable"));
        assert_eq!(a.canonical_text(), "<(1&2&4)>");
    }

    #[test]
    fn untouched_reports_nothing_applied() {
        let mut a = sentence_of(&[&[1, 2, 3], &[1, 2, 4]]);
        assert!(!a.replace(9, 10).expect("mutable"));
        assert!(!a.replace_all(&HashMap::new()).expect("mutable"));
        assert_eq!(a.canonical_text(), "<(1&2&3)|(1&2&4)>");
    }
}

mod resolution {

    use super::*;

    #[test]
    fn expansion_within_phrases() {
        let config = Config::default();
        let b = sentence_of(&[&[0], &[1, 2, 3], &[1, 2, 4]]);

        // One mapped literal in one phrase.
        let mut resolved = b.duplicate(false);
        let expansion = sentence_of(&[&[8, 9], &[6, 7]]);
        assert!(resolved.resolve(4, &expansion, &config).expect("mutable"));
        assert_eq!(resolved.canonical_text(), "<(0)|(1&2&3)|(1&2&6&7)|(1&2&8&9)>");

        // One mapped literal in several phrases.
        let mut resolved = b.duplicate(false);
        assert!(resolved.resolve(2, &expansion, &config).expect("mutable"));
        assert_eq!(
            resolved.canonical_text(),
            "<(0)|(1&3&6&7)|(1&3&8&9)|(1&4&6&7)|(1&4&8&9)>"
        );
    }

    #[test]
    fn expansion_literals_are_not_re_resolved() {
        let config = Config::default();
        let b = sentence_of(&[&[0], &[1, 2, 3], &[1, 2, 4]]);

        // 0 is both a mapped key and a literal of the expansion of 2; the pass
        // leaves the introduced 0 alone, and (0) then absorbs (0&1&3), (0&1&4).
        let mut resolved = b.duplicate(false);
        let expansion = sentence_of(&[&[0], &[8, 9], &[6, 7]]);
        assert!(resolved.resolve(2, &expansion, &config).expect("mutable"));
        assert_eq!(
            resolved.canonical_text(),
            "<(0)|(1&3&6&7)|(1&3&8&9)|(1&4&6&7)|(1&4&8&9)>"
        );
    }

    #[test]
    fn singleton_phrase_expansions() {
        let config = Config::default();
        let a = sentence_of(&[&[1, 2, 3], &[1, 2, 4]]);
        let b = sentence_of(&[&[0], &[1, 2, 3], &[1, 2, 4]]);

        // Resolving 0 to itself changes the text of nothing.
        let mut resolved = b.duplicate(false);
        assert!(resolved
            .resolve(0, &Sentence::from_literal(Rules::Disjunctive, 0), &config)
            .expect("mutable"));
        assert_eq!(resolved, b);

        // To phrases that already exist.
        let mut resolved = b.duplicate(false);
        assert!(resolved.resolve(0, &a, &config).expect("mutable"));
        assert_eq!(resolved, a);

        // To a phrase the rest of the sentence absorbs.
        let mut resolved = b.duplicate(false);
        let absorbed = sentence_of(&[&[1, 2, 4, 0]]);
        assert!(resolved.resolve(0, &absorbed, &config).expect("mutable"));
        assert_eq!(resolved, a);

        // To a phrase which absorbs the rest of the sentence.
        let mut resolved = b.duplicate(false);
        let absorber = sentence_of(&[&[1, 2]]);
        assert!(resolved.resolve(0, &absorber, &config).expect("mutable"));
        assert_eq!(resolved.canonical_text(), "<(1&2)>");
    }

    #[test]
    fn structural_truth_values() {
        let config = Config::default();
        let dnf_true: Sentence<SparsePhrase> = Sentence::true_sentence(Rules::Disjunctive);
        let dnf_false: Sentence<SparsePhrase> = Sentence::false_sentence(Rules::Disjunctive);

        let a = sentence_of(&[&[1, 2, 3], &[1, 2, 4]]);

        // A literal of every phrase, resolved to True, drops out of each.
        let mut resolved = a.duplicate(false);
        assert!(resolved.resolve(1, &dnf_true, &config).expect("mutable"));
        assert_eq!(resolved.canonical_text(), "<(2&3)|(2&4)>");

        // Resolved to False, every phrase containing it goes.
        let mut resolved = a.duplicate(false);
        assert!(resolved.resolve(1, &dnf_false, &config).expect("mutable"));
        assert!(resolved.is_false());

        let mut resolved = a.duplicate(false);
        assert!(resolved.resolve(3, &dnf_true, &config).expect("mutable"));
        assert_eq!(resolved.canonical_text(), "<(1&2)>");

        let mut resolved = a.duplicate(false);
        assert!(resolved.resolve(3, &dnf_false, &config).expect("mutable"));
        assert_eq!(resolved.canonical_text(), "<(1&2&4)>");

        // A whole disjunct resolved to True makes the sentence True.
        let b = sentence_of(&[&[0], &[1, 2, 3], &[1, 2, 4]]);
        let mut resolved = b.duplicate(false);
        assert!(resolved.resolve(0, &dnf_true, &config).expect("mutable"));
        assert!(resolved.is_true());

        // Resolved to False it is simply removed.
        let mut resolved = b.duplicate(false);
        assert!(resolved.resolve(0, &dnf_false, &config).expect("mutable"));
        assert_eq!(resolved.canonical_text(), "<(1&2&3)|(1&2&4)>");
    }

    #[test]
    fn several_keys_in_one_pass() {
        let config = Config::default();
        let mut b = sentence_of(&[&[0], &[1, 2, 3], &[1, 2, 4]]);

        let resolutions = HashMap::from([
            (0, sentence_of(&[&[5]])),
            (2, sentence_of(&[&[6], &[7]])),
        ]);
        assert!(b.resolve_all(&resolutions, &config).expect("mutable"));
        assert_eq!(
            b.canonical_text(),
            "<(5)|(1&3&6)|(1&3&7)|(1&4&6)|(1&4&7)>"
        );
    }

    #[test]
    fn untouched_reports_nothing_applied() {
        let config = Config::default();
        let mut b = sentence_of(&[&[0], &[1, 2, 3], &[1, 2, 4]]);
        let expansion = sentence_of(&[&[8, 9]]);
        assert!(!b.resolve(40, &expansion, &config).expect("mutable"));
        assert_eq!(b.canonical_text(), "<(0)|(1&2&3)|(1&2&4)>");
    }

    #[test]
    fn two_literal_phrases_against_a_large_map() {
        let config = Config::default();

        // Enough entries to push two-literal phrases onto the lookup path.
        let mut resolutions: HashMap<u32, Sentence<SparsePhrase>> = HashMap::default();
        for key in 0..1600 {
            resolutions.insert(10_000 + key, Sentence::from_literal(Rules::Disjunctive, key));
        }
        resolutions.insert(1, sentence_of(&[&[6], &[7]]));

        let mut sentence = sentence_of(&[&[1, 2], &[3, 4]]);
        assert!(sentence.resolve_all(&resolutions, &config).expect("mutable"));
        assert_eq!(sentence.canonical_text(), "<(2&6)|(2&7)|(3&4)>");
    }
}

mod extraction {

    use super::*;

    fn numberer() -> SequentialNumberer<Sentence<SparsePhrase>> {
        SequentialNumberer::new(100)
    }

    #[test]
    fn fully_irrelevant_phrases_share_one_placeholder() {
        let config = Config::default();
        let preserve = HashSet::from([1, 2]);
        let mut extractions = numberer();

        let mut sentence = sentence_of(&[&[50, 51], &[60], &[1, 2]]);
        sentence
            .extract_irrelevant_subpaths(&preserve, &mut extractions, true, &config)
            .expect("mutable");

        assert_eq!(sentence.canonical_text(), "<(100)|(1&2)>");
        let aggregated = sentence_of(&[&[50, 51], &[60]]);
        assert_eq!(extractions.number_for(&aggregated), Some(100));
        assert_eq!(extractions.next_available(), 101);
    }

    #[test]
    fn repeated_residues_share_a_placeholder() {
        let config = Config::default();
        let preserve = HashSet::from([1, 2]);
        let mut extractions = numberer();

        let mut sentence = sentence_of(&[&[1, 50], &[1, 60], &[2, 70]]);
        sentence
            .extract_irrelevant_subpaths(&preserve, &mut extractions, true, &config)
            .expect("mutable");

        // The chunk of residue (1) is numbered; the single-literal chunk of
        // residue (2) is skipped as trivial and 70 stays in place.
        assert_eq!(sentence.canonical_text(), "<(1&100)|(2&70)>");
        assert_eq!(extractions.number_for(&sentence_of(&[&[50], &[60]])), Some(100));
        assert_eq!(extractions.assigned_count(), 1);
    }

    #[test]
    fn trivial_extractions_numbered_on_request() {
        let config = Config::default();
        let preserve = HashSet::from([1, 2]);
        let mut extractions = numberer();

        let mut sentence = sentence_of(&[&[1, 50], &[1, 60], &[2, 70], &[80]]);
        sentence
            .extract_irrelevant_subpaths(&preserve, &mut extractions, false, &config)
            .expect("mutable");

        // Placeholder numbering follows no fixed order, so each is read back from
        // the numberer by content.
        let shared = extractions.number_for(&sentence_of(&[&[50], &[60]])).expect("numbered");
        let trivial = extractions.number_for(&sentence_of(&[&[70]])).expect("numbered");
        let removed = extractions.number_for(&sentence_of(&[&[80]])).expect("numbered");
        assert_eq!(extractions.assigned_count(), 3);

        let mut expected = Sentence::empty(Rules::Disjunctive);
        for phrase in [[1, shared], [2, trivial]] {
            let _ = expected
                .add_phrase_absorbing(SparsePhrase::from_literals(phrase))
                .expect("mutable");
        }
        let _ = expected
            .add_phrase_absorbing(SparsePhrase::singleton(Some(removed)))
            .expect("mutable");
        assert_eq!(sentence, expected);
    }

    #[test]
    fn trivial_removed_phrase_keeps_its_literal() {
        let config = Config::default();
        let preserve = HashSet::from([1, 2]);
        let mut extractions = numberer();

        let mut sentence = sentence_of(&[&[80], &[1, 2]]);
        sentence
            .extract_irrelevant_subpaths(&preserve, &mut extractions, true, &config)
            .expect("mutable");

        assert_eq!(sentence.canonical_text(), "<(80)|(1&2)>");
        assert_eq!(extractions.assigned_count(), 0);
    }

    #[test]
    fn resolving_placeholders_recovers_the_sentence() {
        let config = Config::default();
        let preserve = HashSet::from([1, 2, 3]);
        let mut extractions = numberer();

        let original = sentence_of(&[
            &[1, 2, 50, 51],
            &[1, 2, 60],
            &[3, 70, 71],
            &[80, 81],
            &[1, 3],
        ]);

        let mut compressed = original.duplicate(false);
        compressed
            .extract_irrelevant_subpaths(&preserve, &mut extractions, false, &config)
            .expect("mutable");
        assert!(compressed.literal_count() < original.literal_count());

        let resolutions: HashMap<u32, Sentence<SparsePhrase>> = extractions
            .assigned()
            .iter()
            .map(|(chunk, &placeholder)| (placeholder, chunk.duplicate(false)))
            .collect();
        assert!(compressed.resolve_all(&resolutions, &config).expect("mutable"));
        assert_eq!(compressed, original);
    }
}
