//! End-to-end scenarios through the public analysis boundary.

use linkrank::{analysis, AnalysisConfig, DiGraph, GraphBuilder};

fn build(pairs: &[(&str, &str)]) -> DiGraph {
    DiGraph::from_builder(&GraphBuilder::from_pairs(pairs.iter().copied()))
}

#[test]
fn four_node_cycle_converges_to_quarter() {
    let graph = build(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]);
    let config = AnalysisConfig::default(); // damping 0.85, threshold 1e-4

    let response = analysis::run_pagerank(&graph, &config).unwrap();

    assert!(response.converged);
    assert!(response.iterations < 100);
    for (node, score) in &response.node_scores {
        assert!(
            (score - 0.25).abs() < 1e-3,
            "node {node} scored {score}, expected ~0.25"
        );
    }
}

#[test]
fn star_graph_hits_roles() {
    let graph = build(&[
        ("h", "l1"),
        ("h", "l2"),
        ("h", "l3"),
        ("h", "l4"),
        ("h", "l5"),
    ]);

    let response = analysis::run_hits(&graph, &AnalysisConfig::default()).unwrap();

    assert!(response.converged);
    assert_eq!(response.top_hubs[0].node, "h");
    let h_hub = response.hub_scores["h"];
    let h_auth = response.authority_scores["h"];
    assert_eq!(h_auth, 0.0); // nothing points at h

    let leaf_auth = response.authority_scores["l1"];
    for leaf in ["l1", "l2", "l3", "l4", "l5"] {
        assert!(h_hub > response.hub_scores[leaf]);
        assert!((response.authority_scores[leaf] - leaf_auth).abs() < 1e-12);
        assert!(response.authority_scores[leaf] > h_auth);
    }
}

#[test]
fn pagerank_mass_conserved_with_dangling_nodes() {
    // "sink" has no outgoing edges.
    let graph = build(&[("a", "sink"), ("b", "sink"), ("b", "a"), ("a", "b")]);

    for max_iterations in [1, 3, 100] {
        let config = AnalysisConfig::new()
            .with_max_iterations(max_iterations)
            .with_convergence_threshold(1e-12);
        let response = analysis::run_pagerank(&graph, &config).unwrap();
        let sum: f64 = response.node_scores.values().sum();
        assert!(
            (sum - 1.0).abs() < 1e-9,
            "mass {sum} after {max_iterations} iteration(s)"
        );
    }
}

#[test]
fn empty_graph_immediate_convergence() {
    let graph = DiGraph::default();
    let response = analysis::compare(&graph, &AnalysisConfig::default()).unwrap();

    assert!(response.pagerank.converged);
    assert_eq!(response.pagerank.iterations, 0);
    assert!(response.pagerank.node_scores.is_empty());
    assert!(response.hits.converged);
    assert_eq!(response.hits.iterations, 0);
    assert!(response.hits.authority_scores.is_empty());
    assert!(response.hits.hub_scores.is_empty());
}

#[test]
fn edgeless_graph_uniform_pagerank_zero_hits() {
    let mut builder = GraphBuilder::new();
    for label in ["a", "b", "c", "d"] {
        builder.add_node(label);
    }
    let graph = DiGraph::from_builder(&builder);

    let response = analysis::compare(&graph, &AnalysisConfig::default()).unwrap();
    for score in response.pagerank.node_scores.values() {
        assert!((score - 0.25).abs() < 1e-12);
    }
    for score in response
        .hits
        .authority_scores
        .values()
        .chain(response.hits.hub_scores.values())
    {
        assert_eq!(*score, 0.0);
    }
}

#[test]
fn disjoint_and_identical_overlaps() {
    // Two disconnected 5-cliques of citations: "a*" papers only cite within
    // their own group, "b*" likewise, so their top-5 sets are disjoint when
    // the rankings are restricted by construction.
    let a_ranking = vec![
        ("a1", 0.5),
        ("a2", 0.4),
        ("a3", 0.3),
        ("a4", 0.2),
        ("a5", 0.1),
    ];
    let b_ranking = vec![
        ("b1", 0.5),
        ("b2", 0.4),
        ("b3", 0.3),
        ("b4", 0.2),
        ("b5", 0.1),
    ];
    let to_entries = |pairs: &[(&str, f64)]| {
        pairs
            .iter()
            .map(|(node, score)| linkrank::RankingEntry {
                node: node.to_string(),
                score: *score,
            })
            .collect::<Vec<_>>()
    };

    let a = to_entries(&a_ranking);
    let b = to_entries(&b_ranking);
    assert!(linkrank::overlap(&a, &b).is_empty());

    let shuffled = {
        let mut entries = a.clone();
        entries.reverse();
        entries
    };
    // Identical membership: all 5 nodes, in the first ranking's order.
    assert_eq!(
        linkrank::overlap(&a, &shuffled),
        vec!["a1", "a2", "a3", "a4", "a5"]
    );
}

#[test]
fn compare_is_idempotent() {
    let graph = build(&[
        ("p2", "p1"),
        ("p3", "p1"),
        ("p4", "p2"),
        ("p4", "p3"),
        ("p5", "p1"),
        ("p5", "p4"),
    ]);
    let config = AnalysisConfig::default();

    let first = analysis::compare(&graph, &config).unwrap();
    let second = analysis::compare(&graph, &config).unwrap();

    assert_eq!(first.pagerank.node_scores, second.pagerank.node_scores);
    assert_eq!(first.hits.authority_scores, second.hits.authority_scores);
    assert_eq!(first.hits.hub_scores, second.hits.hub_scores);
    assert_eq!(first.insights, second.insights);
}

#[test]
fn malformed_edge_list_rejected_without_partial_result() {
    let records = vec![vec!["a", "b"], vec!["c"]];
    let err = GraphBuilder::from_edge_list(records).unwrap_err();
    assert_eq!(err.code(), linkrank::ErrorCode::MalformedInput);
}

#[test]
fn visualization_covers_every_node() {
    let graph = build(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")]);
    let config = AnalysisConfig::new().with_top_k(1);

    let data = analysis::visualization(&graph, &config).unwrap();
    assert_eq!(data.nodes.len(), 4);
    assert_eq!(data.edges.len(), 4);
    for node in &data.nodes {
        assert!(node.size > 0.0, "display size must stay positive");
    }
}
