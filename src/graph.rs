//! Graph records for interaction networks
//!
//! Node and edge records are created once from the parsed source and stay
//! immutable afterwards, except for the derived `degree` field. Positions are
//! not stored here - they are computed at runtime by the force simulation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A node in the interaction network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier, typically a gene symbol (e.g. "TP53")
    pub id: String,

    /// Human-readable label for display
    pub label: String,

    /// Number of edge endpoints incident to this node, over the full
    /// (unfiltered) edge set. A self-loop contributes 2.
    #[serde(default)]
    pub degree: u32,
}

impl Node {
    /// Create a node with degree 0 (degrees are assigned after parsing)
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            degree: 0,
        }
    }
}

/// An edge connecting two nodes by id
///
/// Edges are directionless for layout purposes, though source/target roles
/// are preserved from the declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Source node id
    pub source: String,

    /// Target node id
    pub target: String,

    /// Declaration id from the source data
    pub id: i64,

    /// Interaction weight, always positive
    pub weight: f32,
}

/// Complete interaction network as parsed from the source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkGraph {
    /// All nodes, in declaration order
    pub nodes: Vec<Node>,

    /// All edges, in declaration order
    pub edges: Vec<Edge>,
}

impl NetworkGraph {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every node's degree from the full edge set.
    ///
    /// Each edge contributes one increment per endpoint role, so a self-loop
    /// adds 2 to its single endpoint. Edges referencing unknown ids
    /// contribute nothing. Idempotent: degrees are recomputed from zero.
    pub fn assign_degrees(&mut self) {
        let mut counts: HashMap<&str, u32> = HashMap::with_capacity(self.nodes.len());
        for edge in &self.edges {
            *counts.entry(edge.source.as_str()).or_insert(0) += 1;
            *counts.entry(edge.target.as_str()).or_insert(0) += 1;
        }
        for node in &mut self.nodes {
            node.degree = counts.get(node.id.as_str()).copied().unwrap_or(0);
        }
    }
}
