//! Graph description parsing
//!
//! Extracts node and edge declarations from the raw textual graph
//! description. Parsing is best-effort: only well-formed declarations are
//! kept, malformed fragments are skipped without failing the load. Only an
//! unreadable source is fatal.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::graph::{Edge, NetworkGraph, Node};

/// Error raised when the graph description cannot be read at all
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The source file is unreadable or unavailable
    #[error("failed to read graph description: {0}")]
    Io(#[from] std::io::Error),
}

/// Parser for the attribute-based graph description grammar
///
/// Node declarations carry `id` and `label` attributes, edge declarations
/// carry `source`, `target`, `id` and `weight`. Attribute order is free and
/// unknown attributes or elements are ignored.
pub struct GraphParser {
    node_re: Regex,
    edge_re: Regex,
    attr_re: Regex,
}

impl Default for GraphParser {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphParser {
    /// Create a parser with the declaration patterns compiled
    pub fn new() -> Self {
        Self {
            node_re: Regex::new(r"<node\b([^<>]*)>").expect("node pattern compiles"),
            edge_re: Regex::new(r"<edge\b([^<>]*)>").expect("edge pattern compiles"),
            attr_re: Regex::new(r#"([A-Za-z_][\w.:-]*)\s*=\s*"([^"]*)""#)
                .expect("attribute pattern compiles"),
        }
    }

    /// Parse a raw graph description into typed records.
    ///
    /// Declaration order is preserved for both nodes and edges. Degrees are
    /// not assigned here; every node starts at 0.
    pub fn parse(&self, text: &str) -> NetworkGraph {
        let mut graph = NetworkGraph::new();
        let mut skipped = 0usize;

        for tag in self.node_re.captures_iter(text) {
            let attrs = self.attributes(&tag[1]);
            match (attrs.get("id"), attrs.get("label")) {
                (Some(id), Some(label)) => graph.nodes.push(Node::new(*id, *label)),
                _ => skipped += 1,
            }
        }

        for tag in self.edge_re.captures_iter(text) {
            match self.edge_from_attrs(&self.attributes(&tag[1])) {
                Some(edge) => graph.edges.push(edge),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(skipped, "skipped malformed declarations");
        }
        graph
    }

    /// Extract `name="value"` pairs from a tag body
    fn attributes<'t>(&self, body: &'t str) -> HashMap<&'t str, &'t str> {
        self.attr_re
            .captures_iter(body)
            .filter_map(|c| {
                let name = c.get(1)?.as_str();
                let value = c.get(2)?.as_str();
                Some((name, value))
            })
            .collect()
    }

    /// Build an edge if all four required attributes are present and typed.
    ///
    /// The weight must parse as a positive finite number and the id as an
    /// integer, otherwise the declaration is malformed.
    fn edge_from_attrs(&self, attrs: &HashMap<&str, &str>) -> Option<Edge> {
        let source = attrs.get("source")?;
        let target = attrs.get("target")?;
        let id = attrs.get("id")?.parse::<i64>().ok()?;
        let weight = attrs.get("weight")?.parse::<f32>().ok()?;
        if !(weight.is_finite() && weight > 0.0) {
            return None;
        }
        Some(Edge {
            source: source.to_string(),
            target: target.to_string(),
            id,
            weight,
        })
    }
}

/// Parse a graph description with a default parser
pub fn parse_graph(text: &str) -> NetworkGraph {
    GraphParser::new().parse(text)
}

/// Read and parse a graph description file.
///
/// This is the only fatal failure point of initialization: an unreadable
/// source yields [`DataLoadError`], while unparseable content inside a
/// readable file simply yields a smaller (possibly empty) graph.
pub fn load_graph(path: &Path) -> Result<NetworkGraph, DataLoadError> {
    let text = fs::read_to_string(path)?;
    let mut graph = parse_graph(&text);
    graph.assign_degrees();
    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "loaded graph description from {}",
        path.display()
    );
    Ok(graph)
}
