use std::collections::{HashMap, HashSet};

/// Path conditions over a small control-flow graph.
///
/// Each edge of the graph carries a guard atom, and the condition of reaching a node is the
/// disjunction, over its incoming edges, of the source condition conjoined with the edge guard.
/// Conditions are accumulated as disjunctive sentences, so absorption keeps each condition
/// minimal as the graph is walked.
///
/// After the walk, sub-conditions over guards outside a nominated set are extracted to
/// placeholder atoms, and each placeholder is later resolved back to check the round trip.
use boolnf::{
    config::Config,
    generic::numberer::{Numberer, SequentialNumberer},
    structures::{
        atom::Atom,
        phrase::SparsePhrase,
        sentence::{Rules, Sentence},
    },
};

type Condition = Sentence<SparsePhrase>;

fn main() {
    let config = Config::default();

    // Nodes 0..6, edges (from, to, guard).
    //
    //       1 --3-- 3
    //  0 <         > 5
    //       2 --4-- 4
    //
    // with a shortcut 1 --5-- 4 and a direct edge 0 --6-- 5.
    let edges: [(usize, usize, Atom); 7] = [
        (0, 1, 1),
        (0, 2, 2),
        (1, 3, 3),
        (2, 4, 4),
        (1, 4, 5),
        (3, 5, 7),
        (4, 5, 8),
    ];
    let direct: (usize, usize, Atom) = (0, 5, 6);

    let mut conditions: HashMap<usize, Condition> = HashMap::new();
    conditions.insert(0, Sentence::true_sentence(Rules::Disjunctive));

    // The nodes happen to be listed in topological order, so a single pass suffices.
    for node in 1..6 {
        let mut condition = Sentence::empty(Rules::Disjunctive);
        for (from, to, guard) in edges.iter().chain(std::iter::once(&direct)) {
            if *to != node {
                continue;
            }
            let mut along = conditions[from].duplicate(false);
            along.and_literal(*guard).unwrap();
            condition.or_sentence(&along, &config).unwrap();
        }
        conditions.insert(node, condition);
    }

    let reach_exit = &conditions[&5];
    println!("Reaching node 5: {reach_exit}");

    // Only the guards on edges out of node 0 are of interest, the rest are summarised.
    let preserve: HashSet<Atom> = HashSet::from([1, 2, 6]);
    let mut extractions: SequentialNumberer<Condition> = SequentialNumberer::new(100);

    let mut summary = reach_exit.duplicate(false);
    summary
        .extract_irrelevant_subpaths(&preserve, &mut extractions, true, &config)
        .unwrap();
    println!("Summarised:     {summary}");

    for placeholder in 100..extractions.next_available() {
        if let Some(extraction) = extractions
            .assigned()
            .iter()
            .find_map(|(sentence, atom)| (*atom == placeholder).then_some(sentence))
        {
            println!("  {placeholder} stands for {extraction}");
        }
    }

    // Resolving every placeholder recovers the full condition.
    let mut recovered = summary.duplicate(false);
    for (extraction, placeholder) in extractions.assigned() {
        recovered
            .resolve(*placeholder, extraction, &config)
            .unwrap();
    }
    assert_eq!(&recovered, reach_exit);
    println!("Round trip ok.");
}
