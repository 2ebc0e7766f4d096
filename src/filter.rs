//! Visibility filtering
//!
//! Derives the visible subgraph from the live thresholds. Filtering is a
//! view over the full graph, recomputed in full on every threshold change;
//! nothing is ever deleted from the source arrays and their relative order
//! is preserved.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::{Edge, NetworkGraph, Node};

/// User-adjustable visibility thresholds
///
/// `degree_threshold` is a strict lower bound on node degree;
/// `weight_threshold` is an inclusive lower bound on edge weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterThresholds {
    /// Minimum edge weight kept visible (inclusive)
    pub weight_threshold: f32,
    /// Nodes must have degree strictly greater than this to stay visible
    pub degree_threshold: i32,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            weight_threshold: 0.0,
            degree_threshold: 0,
        }
    }
}

impl FilterThresholds {
    /// Clamp out-of-domain values instead of failing.
    ///
    /// Negative or non-finite weights become 0.0, negative degree thresholds
    /// become 0. Never fatal.
    pub fn clamped(self) -> Self {
        let clamped = Self {
            weight_threshold: if self.weight_threshold.is_finite() && self.weight_threshold > 0.0 {
                self.weight_threshold
            } else {
                0.0
            },
            degree_threshold: self.degree_threshold.max(0),
        };
        if clamped != self {
            debug!(requested = ?self, applied = ?clamped, "thresholds clamped into domain");
        }
        clamped
    }
}

/// The visible subgraph derived from thresholds
#[derive(Debug, Clone, Default)]
pub struct VisibleGraph {
    /// Visible nodes, in source order
    pub nodes: Vec<Node>,
    /// Visible edges, in source order; both endpoints are always visible
    pub edges: Vec<Edge>,
}

/// Compute the visible subgraph for the given thresholds.
///
/// Nodes pass on `degree > degree_threshold` (strict); edges pass on
/// `weight >= weight_threshold` (inclusive) with both endpoints visible.
/// Edges referencing ids absent from the node set fail the membership check,
/// which is the graceful handling of a dangling reference, not an error.
pub fn filter(graph: &NetworkGraph, thresholds: FilterThresholds) -> VisibleGraph {
    let thresholds = thresholds.clamped();

    let nodes: Vec<Node> = graph
        .nodes
        .iter()
        .filter(|n| i64::from(n.degree) > i64::from(thresholds.degree_threshold))
        .cloned()
        .collect();

    let visible_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    let edges: Vec<Edge> = graph
        .edges
        .iter()
        .filter(|e| {
            e.weight >= thresholds.weight_threshold
                && visible_ids.contains(e.source.as_str())
                && visible_ids.contains(e.target.as_str())
        })
        .cloned()
        .collect();

    VisibleGraph { nodes, edges }
}
