//! Golden tests for the intrigue kernel.
//!
//! These tests verify determinism and the end-to-end plot scenarios.

use intrigue_kernel::report::{render_plot_report, SAFE_VERDICT, TREASON_VERDICT};
use intrigue_kernel::{
    all_distances, degrees_of_separation, distance, parse_conspiracies, parse_friendships,
    GraphError, InMemorySocialGraph, Outcome, PlotPolicy, PlotResolver, SearchLimits,
    SocialStore,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

const QUEEN: &str = "Cersei Lannister";

const FRIENDS: &str = "\
Cersei Lannister is friends with Jaime Lannister
Cersei Lannister is friends with Tyrion Lannister
Jaime Lannister is friends with Varys
Tyrion Lannister is friends with Bronn
Varys is friends with Littlefinger
Bronn is friends with Littlefinger
Sansa Stark is friends with Littlefinger
Arya Stark is friends with Sansa Stark
";

const PLOTS: &str = "\
Tyrion Lannister is plotting against Cersei Lannister
Sansa Stark is plotting against Cersei Lannister
Jaime Lannister is plotting against Varys
Varys is plotting against Tyrion Lannister
Bronn is plotting against Littlefinger
Littlefinger is plotting against Sansa Stark
Arya Stark is plotting against Sansa Stark
";

fn kingdom() -> InMemorySocialGraph {
    let mut graph = InMemorySocialGraph::new();
    graph.ingest_friendships(parse_friendships(FRIENDS).unwrap()).unwrap();
    graph.ingest_conspiracies(parse_conspiracies(PLOTS).unwrap()).unwrap();
    graph
}

fn build(friends: &[(&str, &str)], plots: &[(&str, &str)]) -> InMemorySocialGraph {
    InMemorySocialGraph::from_pairs(friends.iter().copied(), plots.iter().copied()).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// SHORTEST PATHS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_scenario_friendship_chain() {
    let g = build(&[("A", "B"), ("B", "C")], &[]);

    assert_eq!(degrees_of_separation(&g, "A", "C"), 2);
    assert_eq!(degrees_of_separation(&g, "A", "D"), -1);
}

#[test]
fn test_kingdom_distances() {
    let g = kingdom();

    assert_eq!(degrees_of_separation(&g, QUEEN, "Littlefinger"), 3);
    assert_eq!(degrees_of_separation(&g, QUEEN, "Arya Stark"), 5);
    assert_eq!(degrees_of_separation(&g, "Arya Stark", QUEEN), 5);

    let queen = g.find_node(QUEEN).unwrap();
    let dist = all_distances(&g, queen);
    assert_eq!(dist.len(), g.person_count());
    assert_eq!(dist[&queen], 0);
}

#[test]
fn test_conspiracies_do_not_shorten_friendship_paths() {
    // A plots against C, but only friendship counts.
    let g = build(&[("A", "B"), ("B", "C")], &[("A", "C")]);

    let (a, c) = (g.find_node("A").unwrap(), g.find_node("C").unwrap());
    assert_eq!(distance(&g, a, c), Some(2));
}

// ─────────────────────────────────────────────────────────────────────────────
// PLOT RESOLUTION
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_scenario_single_plotter_resolved() {
    let g = build(&[("Q", "S"), ("Q", "E")], &[("E", "Q"), ("S", "E")]);

    let resolution = PlotResolver::new(&g, PlotPolicy::new("Q", 1)).resolve();

    assert_eq!(resolution.outcome, Outcome::Resolved);
    assert_eq!(
        resolution.allocation.chain_for("E").unwrap().names(),
        &["S".to_string(), "E".to_string()]
    );
}

#[test]
fn test_scenario_shared_intermediate_contested() {
    let g = build(
        &[("Q", "S"), ("Q", "T"), ("Q", "E1"), ("Q", "E2"), ("X", "E1")],
        &[("E1", "Q"), ("E2", "Q"), ("S", "X"), ("T", "X"), ("X", "E1"), ("X", "E2")],
    );

    let resolution = PlotResolver::new(&g, PlotPolicy::new("Q", 1)).resolve();

    assert_eq!(resolution.outcome, Outcome::Contested);
    assert_eq!(
        resolution.allocation.chain_for("E1").map(ToString::to_string),
        Some("S -> X -> E1".to_string())
    );
    assert!(resolution.allocation.unassignable.contains("E2"));
}

#[test]
fn test_scenario_no_queen() {
    let g = build(&[("A", "B")], &[("A", "B")]);

    let resolution = PlotResolver::new(&g, PlotPolicy::default()).resolve();

    assert_eq!(resolution.outcome, Outcome::NoQueen);
    assert!(resolution.distances_from_queen.is_empty());
    assert!(resolution.direct_plotters.is_empty());
    assert!(resolution.allocation.assigned.is_empty());
}

#[test]
fn test_kingdom_resolution() {
    let g = kingdom();

    // Allies within 1: Cersei, Jaime, Tyrion.
    let contested = PlotResolver::new(&g, PlotPolicy::new(QUEEN, 1)).resolve();
    assert_eq!(contested.direct_plotters, vec!["Sansa Stark", "Tyrion Lannister"]);
    assert_eq!(
        contested.allocation.chain_for("Tyrion Lannister").map(ToString::to_string),
        Some("Jaime Lannister -> Varys -> Tyrion Lannister".to_string())
    );
    assert!(contested.allocation.unassignable.contains("Sansa Stark"));
    assert_eq!(contested.outcome, Outcome::Contested);

    // Bronn (distance 2) can now reach Sansa through Littlefinger.
    let resolved = PlotResolver::new(&g, PlotPolicy::new(QUEEN, 2)).resolve();
    assert_eq!(
        resolved.allocation.chain_for("Sansa Stark").map(ToString::to_string),
        Some("Bronn -> Littlefinger -> Sansa Stark".to_string())
    );
    assert_eq!(resolved.outcome, Outcome::Resolved);
}

#[test]
fn test_kingdom_report_text() {
    let g = kingdom();
    let resolution = PlotResolver::new(&g, PlotPolicy::new(QUEEN, 2)).resolve();
    let names = g.sorted_names();

    let report = render_plot_report(&g, &names, 2, &resolution);

    // Varys is now an ally too, so Tyrion's chain shrinks to one hop and
    // is listed first.
    let expected_conspiracies = "Conspiracies:\n\
                                 Varys -> Tyrion Lannister\n\
                                 Bronn -> Littlefinger -> Sansa Stark\n\n";
    assert!(report.contains(expected_conspiracies), "{report}");
    assert!(report.ends_with(&format!("Result:\n{SAFE_VERDICT}\n")));
    assert!(!report.contains(TREASON_VERDICT));
}

#[test]
fn test_missing_endpoint_is_fatal_to_ingestion() {
    let mut g = InMemorySocialGraph::new();
    g.ingest_friendships(parse_friendships(FRIENDS).unwrap()).unwrap();

    let err = g
        .ingest_conspiracies(parse_conspiracies("Ned Stark is plotting against Cersei Lannister").unwrap())
        .unwrap_err();
    assert_eq!(err, GraphError::MissingEndpoint { name: "Ned Stark".to_string() });
}

// ─────────────────────────────────────────────────────────────────────────────
// DETERMINISM TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_same_graph_same_fingerprint_100_runs() {
    let g = kingdom();
    let resolver = PlotResolver::new(&g, PlotPolicy::new(QUEEN, 2));

    let first = resolver.resolve();
    for i in 1..100 {
        let again = resolver.resolve();
        assert_eq!(first, again, "Resolution must be deterministic (run {} differs)", i);
        assert_eq!(first.fingerprint(), again.fingerprint());
    }
}

#[test]
fn test_rebuilt_graph_same_fingerprint() {
    let a = PlotResolver::new(&kingdom(), PlotPolicy::new(QUEEN, 2)).resolve();
    let b = PlotResolver::new(&kingdom(), PlotPolicy::new(QUEEN, 2)).resolve();

    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn test_policy_change_changes_fingerprint() {
    let g = kingdom();

    let unbounded = PlotResolver::new(&g, PlotPolicy::new(QUEEN, 2)).resolve();
    let bounded = PlotResolver::new(
        &g,
        PlotPolicy::new(QUEEN, 2).with_limits(SearchLimits::max_chain_len(3)),
    )
    .resolve();

    // Same chains (none longer than 3), different policy hash.
    assert_eq!(unbounded.allocation, bounded.allocation);
    assert_ne!(unbounded.params_hash, bounded.params_hash);
    assert_ne!(unbounded.fingerprint(), bounded.fingerprint());
}
