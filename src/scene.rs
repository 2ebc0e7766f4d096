//! Render-ready scene output
//!
//! Every simulation step the engine emits a scene: node sprites, edge
//! sprites and an optional label layer. The drawing layer consumes these
//! without knowing anything about forces or thresholds, and the same
//! structures serialize to JSON for the layout export.

use serde::{Deserialize, Serialize};

use crate::category::{Category, Highlight, classify, display_color};
use crate::interaction::Selection;
use crate::simulation::ForceSimulation;

/// Nodes above this degree always carry a label when labels are shown
pub const LABEL_DEGREE: u32 = 15;

/// A node ready to draw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSprite {
    /// Node id
    pub id: String,
    /// Position
    pub x: f32,
    pub y: f32,
    /// Radius in pixels
    pub radius: f32,
    /// Display color after highlight dimming (RGBA, normalized)
    pub color: [f32; 4],
    /// Category assigned by the classifier
    pub category: Category,
}

/// An edge ready to draw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSprite {
    /// Edge declaration id
    pub id: i64,
    /// Source endpoint position
    pub x1: f32,
    pub y1: f32,
    /// Target endpoint position
    pub x2: f32,
    pub y2: f32,
    /// Stroke opacity derived from the interaction weight
    pub stroke_opacity: f32,
    /// Stroke width derived from the interaction weight
    pub stroke_width: f32,
}

/// A text label to draw on top of the node layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSprite {
    /// Node id the label belongs to
    pub id: String,
    /// Label text
    pub text: String,
    /// Anchor position (the node center)
    pub x: f32,
    pub y: f32,
}

/// One frame of render output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub nodes: Vec<NodeSprite>,
    pub edges: Vec<EdgeSprite>,
    pub labels: Vec<LabelSprite>,
}

/// Build the scene for the simulation's current state.
///
/// Sprites come out in visible-set order. The label layer is produced only
/// when `show_labels` is on, and covers hub nodes (degree above
/// [`LABEL_DEGREE`]) plus the selected node.
pub fn build_scene(
    sim: &ForceSimulation,
    highlight: Highlight,
    selection: &Selection,
    show_labels: bool,
) -> Scene {
    let nodes: Vec<NodeSprite> = sim
        .nodes()
        .iter()
        .map(|n| {
            let category = classify(&n.id);
            NodeSprite {
                id: n.id.clone(),
                x: n.x,
                y: n.y,
                radius: n.radius,
                color: display_color(category, highlight),
                category,
            }
        })
        .collect();

    let edges: Vec<EdgeSprite> = sim
        .edges()
        .iter()
        .map(|e| {
            let source = &sim.nodes()[e.source];
            let target = &sim.nodes()[e.target];
            EdgeSprite {
                id: e.id,
                x1: source.x,
                y1: source.y,
                x2: target.x,
                y2: target.y,
                stroke_opacity: e.weight * 1000.0,
                stroke_width: (e.weight * 5000.0 - 3.0).max(1.0),
            }
        })
        .collect();

    let labels: Vec<LabelSprite> = if show_labels {
        sim.nodes()
            .iter()
            .filter(|n| n.degree > LABEL_DEGREE || selection.selected() == Some(n.id.as_str()))
            .map(|n| LabelSprite {
                id: n.id.clone(),
                text: n.label.clone(),
                x: n.x,
                y: n.y,
            })
            .collect()
    } else {
        Vec::new()
    };

    Scene {
        nodes,
        edges,
        labels,
    }
}

/// Find the node under the pointer, if any (for click and drag entry).
///
/// Nodes are tested in visible-set order; the first circle containing the
/// point wins.
pub fn node_at(sim: &ForceSimulation, x: f32, y: f32) -> Option<&str> {
    sim.nodes()
        .iter()
        .find(|n| {
            let dx = x - n.x;
            let dy = y - n.y;
            dx * dx + dy * dy <= n.radius * n.radius
        })
        .map(|n| n.id.as_str())
}
