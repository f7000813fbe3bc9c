//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores edges contiguously, making iteration over neighbors very
//! fast. Both engines repeatedly sweep all edges, PageRank and HITS over
//! in-neighbors and HITS over out-neighbors as well, so the graph keeps a
//! forward and a reverse CSR view.

use serde::Serialize;

use super::builder::GraphBuilder;

/// An immutable directed graph in Compressed Sparse Row format.
///
/// Built once per scoring request from a [`GraphBuilder`] and never mutated
/// afterward, so concurrent engine runs may share it freely by reference.
/// Parallel edges are preserved: a duplicated edge appears twice in both
/// adjacency views and counts twice in degrees.
#[derive(Debug, Clone)]
pub struct DiGraph {
    /// Number of nodes
    num_nodes: usize,
    /// Forward view: node i's successors are out_col[out_row[i]..out_row[i+1]]
    out_row: Vec<usize>,
    out_col: Vec<u32>,
    /// Reverse view: node i's predecessors are in_col[in_row[i]..in_row[i+1]]
    in_row: Vec<usize>,
    in_col: Vec<u32>,
    /// Node labels in first-seen order
    labels: Vec<String>,
    /// Original edge list in insertion order, for echoing to callers
    edges: Vec<(u32, u32)>,
}

impl DiGraph {
    /// Freeze a [`GraphBuilder`] into CSR form.
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let edges = builder.edges().to_vec();

        // Counting sort of the edge list into both adjacency views.
        let mut out_degree = vec![0usize; num_nodes];
        let mut in_degree = vec![0usize; num_nodes];
        for &(from, to) in &edges {
            out_degree[from as usize] += 1;
            in_degree[to as usize] += 1;
        }

        let mut out_row = Vec::with_capacity(num_nodes + 1);
        let mut in_row = Vec::with_capacity(num_nodes + 1);
        out_row.push(0);
        in_row.push(0);
        for i in 0..num_nodes {
            out_row.push(out_row[i] + out_degree[i]);
            in_row.push(in_row[i] + in_degree[i]);
        }

        let mut out_col = vec![0u32; edges.len()];
        let mut in_col = vec![0u32; edges.len()];
        let mut out_cursor = out_row[..num_nodes].to_vec();
        let mut in_cursor = in_row[..num_nodes].to_vec();
        for &(from, to) in &edges {
            out_col[out_cursor[from as usize]] = to;
            out_cursor[from as usize] += 1;
            in_col[in_cursor[to as usize]] = from;
            in_cursor[to as usize] += 1;
        }

        Self {
            num_nodes,
            out_row,
            out_col,
            in_row,
            in_col,
            labels: builder.labels().to_vec(),
            edges,
        }
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of directed edges, counting duplicates.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over the successors of a node (with multiplicity).
    pub fn out_neighbors(&self, node: u32) -> &[u32] {
        &self.out_col[self.out_row[node as usize]..self.out_row[node as usize + 1]]
    }

    /// Iterate over the predecessors of a node (with multiplicity).
    pub fn in_neighbors(&self, node: u32) -> &[u32] {
        &self.in_col[self.in_row[node as usize]..self.in_row[node as usize + 1]]
    }

    /// Out-degree of a node, counting parallel edges.
    pub fn out_degree(&self, node: u32) -> usize {
        self.out_row[node as usize + 1] - self.out_row[node as usize]
    }

    /// In-degree of a node, counting parallel edges.
    pub fn in_degree(&self, node: u32) -> usize {
        self.in_row[node as usize + 1] - self.in_row[node as usize]
    }

    /// Get the label for a node.
    pub fn label(&self, node: u32) -> &str {
        &self.labels[node as usize]
    }

    /// Node labels in first-seen order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The original edge list in insertion order.
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Find dangling nodes (nodes with no outgoing edges).
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree(n) == 0)
            .collect()
    }

    /// Aggregate statistics for the network.
    pub fn statistics(&self) -> GraphStatistics {
        let n = self.num_nodes;
        let e = self.num_edges();
        let density = if n > 1 {
            e as f64 / (n as f64 * (n as f64 - 1.0))
        } else {
            0.0
        };
        let avg_degree = if n > 0 {
            // Each edge contributes one out- and one in-degree.
            2.0 * e as f64 / n as f64
        } else {
            0.0
        };
        GraphStatistics {
            num_nodes: n,
            num_edges: e,
            density,
            avg_degree,
        }
    }

    /// In/out/total degrees for a node.
    pub fn degrees(&self, node: u32) -> NodeDegrees {
        let in_degree = self.in_degree(node);
        let out_degree = self.out_degree(node);
        NodeDegrees {
            in_degree,
            out_degree,
            total_degree: in_degree + out_degree,
        }
    }
}

impl Default for DiGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            out_row: vec![0],
            out_col: Vec::new(),
            in_row: vec![0],
            in_col: Vec::new(),
            labels: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// Aggregate network statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub num_nodes: usize,
    pub num_edges: usize,
    /// Edge count over the maximum possible `n * (n - 1)`, 0 when n <= 1.
    pub density: f64,
    /// Average total (in + out) degree.
    pub avg_degree: f64,
}

/// In/out/total degree of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeDegrees {
    pub in_degree: usize,
    pub out_degree: usize,
    pub total_degree: usize,
}
