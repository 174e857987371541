//! End-to-end tests for the Armstrong relation search.

use armstrong_rs::attribute::AttributeSet;
use armstrong_rs::closure::{generators, GenClosure};
use armstrong_rs::search::{armstrong_relation, find_min_agree_set_graph, Search, SearchConfig};
use armstrong_rs::SearchError;

fn sets(bits: &[&str]) -> Vec<AttributeSet> {
    bits.iter().map(|s| s.parse().unwrap()).collect()
}

fn sorted(mut v: Vec<AttributeSet>) -> Vec<AttributeSet> {
    v.sort();
    v
}

// ─── Scenario 1: three generators over four attributes ─────────────────────────

#[test_log::test]
fn three_generators_over_four_attributes() {
    let family = sets(&["1011", "1110", "1000"]);
    let g = find_min_agree_set_graph(&family, &SearchConfig::default()).unwrap();

    assert!(g.num_nodes() <= 4);
    assert!(g.validate().is_ok());

    // Every pair agrees on a closed, non-full set, and every generator occurs.
    let closure = GenClosure::new(4, family.clone());
    let table = g.to_table();
    for b in 1..table.num_rows() {
        for a in 0..b {
            let ag = table.agree_set(a, b);
            assert_eq!(ag, *g.at(a, b));
            assert!(!ag.is_full());
            assert_eq!(armstrong_rs::closure::Closure::closure(&closure, &ag), ag);
        }
    }
    let found = table.agree_sets();
    for gen in &family {
        assert!(found.contains(gen), "generator {} missing", gen);
    }
}

#[test_log::test]
fn three_generators_no_smaller_relation() {
    let family = sets(&["1011", "1110", "1000"]);
    let g = find_min_agree_set_graph(&family, &SearchConfig::default()).unwrap();
    let smaller = SearchConfig::default().with_max_nodes(g.num_nodes() - 1);
    assert_eq!(
        find_min_agree_set_graph(&family, &smaller).unwrap_err(),
        SearchError::CeilingReached {
            max_nodes: g.num_nodes() - 1
        }
    );
}

// ─── Scenario 2: a single empty generator ──────────────────────────────────────

#[test_log::test]
fn single_empty_generator() {
    let family = sets(&["0000"]);
    let g = find_min_agree_set_graph(&family, &SearchConfig::default()).unwrap();
    assert_eq!(g.num_nodes(), 2);
    assert!(g.at(0, 1).is_empty());
    assert!(g.is_assigned(0, 1));

    let table = g.to_table();
    assert_eq!(table.num_rows(), 2);
    assert!(table.agree_set(0, 1).is_empty());
}

// ─── Scenario 3: every propagation collapses ───────────────────────────────────

#[test_log::test]
fn collapsing_closure_exhausts_all_node_counts() {
    // A closure operator under which every propagated edge spans the full schema.
    let universe = |x: &AttributeSet| AttributeSet::full(x.width());
    let gens = sets(&["011", "101"]);

    // On three nodes every pair of edges shares a node, so the second assignment always
    // propagates attribute 0 onto the third edge.
    let config = SearchConfig::default().with_max_nodes(3);
    let mut search = Search::new(3, &gens, &universe, config);
    assert_eq!(search.run().unwrap_err(), SearchError::CeilingReached { max_nodes: 3 });
    assert!(search.steps() > 0);

    // Without pruning the outcome is the same.
    let config = SearchConfig::default().with_max_nodes(3).with_symmetry_pruning(false);
    let mut search = Search::new(3, &gens, &universe, config);
    assert_eq!(search.run().unwrap_err(), SearchError::CeilingReached { max_nodes: 3 });
}

#[test_log::test]
fn collapsing_closure_allows_disjoint_edges() {
    // With a fourth node the generators can sit on disjoint edges, where nothing propagates.
    let universe = |x: &AttributeSet| AttributeSet::full(x.width());
    let gens = sets(&["011", "101"]);
    let mut search = Search::new(3, &gens, &universe, SearchConfig::default().with_max_nodes(4));
    let g = search.run().unwrap();
    assert_eq!(g.num_nodes(), 4);
    assert!(g.is_assigned(0, 1));
    assert!(g.is_assigned(2, 3));
}

// ─── Round trip ────────────────────────────────────────────────────────────────

#[test_log::test]
fn table_reproduces_closure_system() {
    let families = [
        sets(&["1011", "1110", "1000"]),
        sets(&["011", "110"]),
        sets(&["0101", "1001", "0110", "1010"]),
        sets(&["00111", "01101", "11010", "10001", "01110"]),
        sets(&["110", "101", "011", "100", "010", "001"]),
    ];
    for family in families {
        let table = armstrong_relation(&family, &SearchConfig::default()).unwrap();
        assert_eq!(
            sorted(generators(&table.agree_sets())),
            sorted(generators(&family)),
            "closure system changed for {:?}\n{}",
            family,
            table
        );
    }
}

#[test_log::test]
fn redundant_agree_sets_do_not_add_tuples() {
    // "1010" is the intersection of the other two and "1111" is trivial.
    let family = sets(&["1011", "1010", "1110", "1111", "1011"]);
    let g = find_min_agree_set_graph(&family, &SearchConfig::default()).unwrap();
    assert_eq!(g.num_nodes(), 3);
    assert_eq!(g.num_assigned(), 2);
}

// ─── Failure modes ─────────────────────────────────────────────────────────────

#[test_log::test]
fn budget_exhaustion_is_distinct_from_no_solution() {
    let family = sets(&["0101", "1001", "0110", "1010"]);
    let err = find_min_agree_set_graph(&family, &SearchConfig::default().with_max_steps(2)).unwrap_err();
    assert_eq!(err, SearchError::BudgetExhausted { budget: 2 });
    assert_eq!(err.to_string(), "backtracking budget of 2 steps exhausted");
}

#[test_log::test]
fn default_ceiling_always_admits_a_solution() {
    let family = sets(&["100000", "010000", "001000", "000100", "000010"]);
    let g = find_min_agree_set_graph(&family, &SearchConfig::default()).unwrap();
    assert!(g.num_nodes() <= family.len() + 1);
    assert!(g.validate().is_ok());
}
