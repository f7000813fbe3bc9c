//! Graph builder with string node interning
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) node lookups during construction. Node identifiers are opaque
//! byte-equal keys: no trimming or case folding is applied.

use rustc_hash::FxHashMap;

use crate::error::{AnalysisError, Result};

/// A mutable directed-graph builder optimized for incremental construction.
///
/// Nodes are assigned dense `u32` ids in first-seen order; that order is the
/// deterministic tie-break for every ranking downstream. Duplicate edges and
/// self-loops are kept as-is.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Maps node label -> node ID
    label_to_id: FxHashMap<String, u32>,
    /// Node labels in first-seen order
    labels: Vec<String>,
    /// Directed edges as (source, target) id pairs, in insertion order
    edges: Vec<(u32, u32)>,
}

impl GraphBuilder {
    /// Create a new empty graph builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph builder with pre-allocated capacity.
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            labels: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    /// Get or create a node for the given label, returning its ID.
    pub fn get_or_create_node(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.labels.len() as u32;
        self.label_to_id.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }

    /// Add a directed edge, creating endpoints as needed.
    ///
    /// Duplicates are kept (a repeated link counts twice) and self-loops are
    /// permitted.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let from = self.get_or_create_node(source);
        let to = self.get_or_create_node(target);
        self.edges.push((from, to));
    }

    /// Add an isolated node if it is not already present.
    pub fn add_node(&mut self, label: &str) -> u32 {
        self.get_or_create_node(label)
    }

    /// Build from `(source, target)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        for (source, target) in pairs {
            builder.add_edge(source.as_ref(), target.as_ref());
        }
        builder
    }

    /// Build from raw edge records, e.g. parsed dataset rows.
    ///
    /// The first two fields of each record are source and target; extra
    /// fields are ignored. A record with fewer than two fields fails with
    /// [`AnalysisError::MalformedInput`] and no partial graph is returned.
    pub fn from_edge_list<I, R, S>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        for (index, record) in records.into_iter().enumerate() {
            let fields = record.as_ref();
            match fields {
                [source, target, ..] => builder.add_edge(source.as_ref(), target.as_ref()),
                [_] => {
                    return Err(AnalysisError::MalformedInput {
                        index,
                        reason: "missing target field".into(),
                    })
                }
                [] => {
                    return Err(AnalysisError::MalformedInput {
                        index,
                        reason: "missing source and target fields".into(),
                    })
                }
            }
        }
        Ok(builder)
    }

    /// Get the number of nodes seen so far.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Get the number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get a node ID by label.
    pub fn get_node_id(&self, label: &str) -> Option<u32> {
        self.label_to_id.get(label).copied()
    }

    /// Get the label for a node ID.
    pub fn get_label(&self, id: u32) -> Option<&str> {
        self.labels.get(id as usize).map(String::as_str)
    }

    /// Node labels in first-seen order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Directed edges in insertion order.
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_builder_basic() {
        let mut builder = GraphBuilder::new();

        let id_a = builder.get_or_create_node("paper_a");
        let id_b = builder.get_or_create_node("paper_b");
        let id_c = builder.get_or_create_node("paper_a"); // duplicate

        assert_eq!(id_a, id_c); // Same label should get same ID
        assert_ne!(id_a, id_b);
        assert_eq!(builder.node_count(), 2);
    }

    #[test]
    fn test_first_seen_order() {
        let builder = GraphBuilder::from_pairs([("c", "a"), ("a", "b")]);
        // Node ids follow first appearance, sources before targets.
        assert_eq!(builder.labels(), &["c", "a", "b"]);
        assert_eq!(builder.get_node_id("c"), Some(0));
        assert_eq!(builder.get_node_id("b"), Some(2));
    }

    #[test]
    fn test_duplicate_edges_kept() {
        let builder = GraphBuilder::from_pairs([("a", "b"), ("a", "b")]);
        assert_eq!(builder.edge_count(), 2);
        assert_eq!(builder.edges(), &[(0, 1), (0, 1)]);
    }

    #[test]
    fn test_self_loops_kept() {
        let builder = GraphBuilder::from_pairs([("a", "a")]);
        assert_eq!(builder.node_count(), 1);
        assert_eq!(builder.edges(), &[(0, 0)]);
    }

    #[test]
    fn test_no_normalization_of_labels() {
        let builder = GraphBuilder::from_pairs([(" A ", "a"), ("A", "a")]);
        // " A ", "A", and "a" are three distinct opaque keys.
        assert_eq!(builder.node_count(), 3);
    }

    #[test]
    fn test_from_edge_list_valid() {
        let records = vec![vec!["a", "b"], vec!["b", "c", "extra-field"]];
        let builder = GraphBuilder::from_edge_list(records).unwrap();
        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 2);
    }

    #[test]
    fn test_from_edge_list_missing_target() {
        let records = vec![vec!["a", "b"], vec!["b"]];
        let err = GraphBuilder::from_edge_list(records).unwrap_err();
        assert!(err.to_string().contains("index 1"));
        assert!(err.to_string().contains("missing target"));
    }

    #[test]
    fn test_from_edge_list_empty_record() {
        let records: Vec<Vec<&str>> = vec![vec![]];
        assert!(GraphBuilder::from_edge_list(records).is_err());
    }

    #[test]
    fn test_isolated_node() {
        let mut builder = GraphBuilder::from_pairs([("a", "b")]);
        builder.add_node("lonely");
        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 1);
    }
}
