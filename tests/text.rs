use boolnf::{
    structures::{
        phrase::{DensePhrase, SparsePhrase},
        sentence::{Connectives, Rules, Sentence},
    },
    types::err::{ErrorKind, FormatError, LiteralError},
};

mod writing {

    use super::*;

    #[test]
    fn canonical_ordering() {
        let mut sentence: Sentence<DensePhrase> = Sentence::or_literals(Rules::Disjunctive, [7, 4]);
        sentence.or_literal(5).expect("mutable");

        // Shorter phrases first, ties by first differing literal.
        assert_eq!(sentence.canonical_text(), "<(4)|(5)|(7)>");
        sentence.and_literal(1).expect("mutable");
        assert_eq!(sentence.canonical_text(), "<(1&4)|(1&5)|(1&7)>");
        assert_eq!(format!("{sentence}"), "<(1&4)|(1&5)|(1&7)>");
    }

    #[test]
    fn connective_families() {
        let mut sentence: Sentence<SparsePhrase> = Sentence::or_literals(Rules::Disjunctive, [1, 2]);
        sentence.or_sentence(
            &Sentence::and_literals(Rules::Disjunctive, [3, 4]),
            &boolnf::config::Config::default(),
        ).expect("mutable");

        assert_eq!(sentence.as_text(&Connectives::DISJUNCTIVE_STD, true), "(1)|(2)|(3&4)");
        assert_eq!(sentence.csv_text(), "1,2,3&4");
        assert_eq!(sentence.as_text(&Connectives::DEFAULT, true), "(1)-(2)-(3+4)");

        let conjunctive: Sentence<SparsePhrase> = Sentence::or_literals(Rules::Conjunctive, [1, 2]);
        assert_eq!(conjunctive.canonical_text(), "<(1|2)>");
        assert_eq!(conjunctive.csv_text(), "1|2");
    }

    #[test]
    fn truth_values_in_text() {
        let dnf_true: Sentence<DensePhrase> = Sentence::true_sentence(Rules::Disjunctive);
        assert_eq!(dnf_true.canonical_text(), "<()>");
        let dnf_false: Sentence<DensePhrase> = Sentence::false_sentence(Rules::Disjunctive);
        assert_eq!(dnf_false.canonical_text(), "<>");
    }
}

mod reading {

    use super::*;

    #[test]
    fn duplicates_and_absorption_on_read() {
        let sentence: Sentence<DensePhrase> =
            Sentence::from_canonical_text(Rules::Disjunctive, "<(2&5)|(4&7&7)|(5)>").expect("reads");
        assert_eq!(sentence.canonical_text(), "<(5)|(4&7)>");
    }

    #[test]
    fn wrapped_forms_tolerate_stray_separators() {
        let connectives = Connectives::DISJUNCTIVE_STD;

        let sentence: Sentence<DensePhrase> =
            Sentence::from_text(Rules::Disjunctive, "(2&5)||(4&7)", &connectives).expect("reads");
        assert_eq!(sentence.canonical_text(), "<(2&5)|(4&7)>");

        let sentence: Sentence<DensePhrase> =
            Sentence::from_text(Rules::Disjunctive, "(2&5)|", &connectives).expect("reads");
        assert_eq!(sentence.canonical_text(), "<(2&5)>");

        let sentence: Sentence<DensePhrase> =
            Sentence::from_text(Rules::Disjunctive, "(&2&&5)", &connectives).expect("reads");
        assert_eq!(sentence.canonical_text(), "<(2&5)>");
    }

    #[test]
    fn empty_text_and_empty_phrase() {
        let connectives = Connectives::DISJUNCTIVE_STD;

        let sentence: Sentence<DensePhrase> =
            Sentence::from_text(Rules::Disjunctive, "", &connectives).expect("reads");
        assert!(sentence.is_false());

        let sentence: Sentence<DensePhrase> =
            Sentence::from_text(Rules::Disjunctive, "()", &connectives).expect("reads");
        assert!(sentence.is_true());

        // Without wrappers the two readings collapse, and a stray separator cannot
        // be told from an empty phrase.
        let sentence: Sentence<DensePhrase> =
            Sentence::from_text(Rules::Disjunctive, "", &Connectives::DISJUNCTIVE_CSV).expect("reads");
        assert!(sentence.is_false());
        let result: Result<Sentence<DensePhrase>, ErrorKind> =
            Sentence::from_text(Rules::Disjunctive, "1&2,,3", &Connectives::DISJUNCTIVE_CSV);
        assert_eq!(result.err(), Some(ErrorKind::Format(FormatError::StraySeparator)));
    }

    #[test]
    fn csv_round_trip() {
        let text = "1,2,3&4";
        let sentence: Sentence<SparsePhrase> =
            Sentence::from_text(Rules::Disjunctive, text, &Connectives::DISJUNCTIVE_CSV).expect("reads");
        assert_eq!(sentence.csv_text(), text);
    }

    #[test]
    fn round_trips() {
        let texts = ["(1)|(2)|(3&4)", "()", "", "(0&63)"];
        for text in texts {
            let sentence: Sentence<DensePhrase> =
                Sentence::from_text(Rules::Disjunctive, text, &Connectives::DISJUNCTIVE_STD)
                    .expect("reads");
            assert_eq!(sentence.as_text(&Connectives::DISJUNCTIVE_STD, true), text);

            let again: Sentence<DensePhrase> =
                Sentence::from_canonical_text(Rules::Disjunctive, &sentence.canonical_text())
                    .expect("reads");
            assert_eq!(again, sentence);
        }

        let conjunctive: Sentence<SparsePhrase> =
            Sentence::from_text(Rules::Conjunctive, "(1|2)&(70000)", &Connectives::CONJUNCTIVE_STD)
                .expect("reads");
        assert_eq!(conjunctive.canonical_text(), "<(70000)&(1|2)>");
    }
}

mod errors {

    use super::*;

    #[test]
    fn missing_wrappers() {
        let connectives = Connectives::DISJUNCTIVE_STD;

        let result: Result<Sentence<DensePhrase>, ErrorKind> =
            Sentence::from_text(Rules::Disjunctive, "2&5", &connectives);
        assert!(matches!(result, Err(ErrorKind::Format(FormatError::PhraseBegin(_)))));

        let result: Result<Sentence<DensePhrase>, ErrorKind> =
            Sentence::from_text(Rules::Disjunctive, "(2&5", &connectives);
        assert!(matches!(result, Err(ErrorKind::Format(FormatError::PhraseEnd(_)))));
    }

    #[test]
    fn wrong_inner_connective_reads_as_a_literal() {
        let result: Result<Sentence<DensePhrase>, ErrorKind> =
            Sentence::from_text(Rules::Disjunctive, "(2+5)", &Connectives::DISJUNCTIVE_STD);
        assert!(matches!(result, Err(ErrorKind::Literal(LiteralError::Unreadable(_)))));
    }

    #[test]
    fn canonical_brackets_required() {
        let result: Result<Sentence<DensePhrase>, ErrorKind> =
            Sentence::from_canonical_text(Rules::Disjunctive, "(2&5)");
        assert!(matches!(result, Err(ErrorKind::Format(FormatError::SentenceBegin(_)))));

        let result: Result<Sentence<DensePhrase>, ErrorKind> =
            Sentence::from_canonical_text(Rules::Disjunctive, "<(2&5)");
        assert!(matches!(result, Err(ErrorKind::Format(FormatError::SentenceEnd(_)))));
    }

    #[test]
    fn dense_domain_bound() {
        let result: Result<Sentence<DensePhrase>, ErrorKind> =
            Sentence::from_text(Rules::Disjunctive, "(64)", &Connectives::DISJUNCTIVE_STD);
        assert!(matches!(result, Err(ErrorKind::Literal(LiteralError::OutOfDomain(_)))));

        // A sparse phrase has no such bound.
        let sentence: Sentence<SparsePhrase> =
            Sentence::from_text(Rules::Disjunctive, "(64)", &Connectives::DISJUNCTIVE_STD)
                .expect("reads");
        assert_eq!(sentence.canonical_text(), "<(64)>");
    }

    #[test]
    fn a_failed_read_leaves_the_sentence_empty() {
        let mut sentence: Sentence<DensePhrase> = Sentence::or_literals(Rules::Disjunctive, [1, 2]);
        let result = sentence.read_text("(3)|(4&", &Connectives::DISJUNCTIVE_STD);
        assert!(result.is_err());
        assert!(sentence.is_empty());
    }
}
