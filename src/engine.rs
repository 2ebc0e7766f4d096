//! Engine facade
//!
//! Owns the full graph, the live thresholds, highlight/selection state, the
//! drag controller and the force simulation, and exposes the operations the
//! embedding UI drives: reconfigure on slider changes, step per animation
//! frame, click and drag entry points. Single-threaded by construction -
//! every operation runs between simulation steps.

use tracing::debug;

use crate::category::{Category, Highlight};
use crate::filter::{FilterThresholds, VisibleGraph, filter};
use crate::graph::NetworkGraph;
use crate::interaction::{DragController, Selection};
use crate::scene::{Scene, build_scene, node_at};
use crate::simulation::{ForceSimulation, SimulationConfig};

/// Interactive layout engine over a parsed interaction network
pub struct NetworkEngine {
    graph: NetworkGraph,
    thresholds: FilterThresholds,
    highlight: Highlight,
    selection: Selection,
    drag: DragController,
    simulation: ForceSimulation,
    show_labels: bool,
}

impl NetworkEngine {
    /// Build an engine over the full graph.
    ///
    /// Degrees are (re)assigned here so callers can hand over a freshly
    /// parsed graph directly.
    pub fn new(
        mut graph: NetworkGraph,
        thresholds: FilterThresholds,
        config: SimulationConfig,
    ) -> Self {
        graph.assign_degrees();
        let thresholds = thresholds.clamped();
        let visible = filter(&graph, thresholds);
        debug!(
            nodes = visible.nodes.len(),
            edges = visible.edges.len(),
            "engine initialized"
        );
        let simulation = ForceSimulation::new(&visible, config);

        Self {
            graph,
            thresholds,
            highlight: Highlight::All,
            selection: Selection::new(),
            drag: DragController::new(),
            simulation,
            show_labels: true,
        }
    }

    /// Apply new thresholds: refilter the full graph and hand the new
    /// visible set to the simulation, which reheats.
    pub fn reconfigure(&mut self, thresholds: FilterThresholds) {
        self.thresholds = thresholds.clamped();
        let visible = self.visible();
        debug!(
            nodes = visible.nodes.len(),
            edges = visible.edges.len(),
            "visible set recomputed"
        );
        self.simulation.reconfigure(&visible);
    }

    /// Advance the simulation by one step, if it is active
    pub fn step(&mut self) {
        self.simulation.tick();
    }

    /// Render output for the current state
    pub fn scene(&self) -> Scene {
        build_scene(
            &self.simulation,
            self.highlight,
            &self.selection,
            self.show_labels,
        )
    }

    /// Halt stepping; positions stay as they are
    pub fn stop(&mut self) {
        self.simulation.stop();
    }

    /// A node was clicked: select it
    pub fn node_clicked(&mut self, id: &str) {
        self.selection.node_clicked(id);
    }

    /// Empty canvas was clicked: clear the selection
    pub fn canvas_clicked(&mut self) {
        self.selection.canvas_clicked();
    }

    /// A category legend entry was clicked: toggle the highlight
    pub fn legend_clicked(&mut self, category: Category) {
        self.highlight = self.highlight.toggled(category);
    }

    /// Begin dragging a node
    pub fn drag_start(&mut self, id: &str) {
        self.drag.drag_start(&mut self.simulation, id);
    }

    /// Update an active drag with the pointer position
    pub fn drag_move(&mut self, id: &str, x: f32, y: f32) {
        self.drag.drag_move(&mut self.simulation, id, x, y);
    }

    /// End a drag
    pub fn drag_end(&mut self, id: &str) {
        self.drag.drag_end(&mut self.simulation, id);
    }

    /// Map pointer coordinates to a node id
    pub fn node_at(&self, x: f32, y: f32) -> Option<&str> {
        node_at(&self.simulation, x, y)
    }

    /// Toggle the label sub-layer
    pub fn set_show_labels(&mut self, show: bool) {
        self.show_labels = show;
    }

    /// Current highlight state
    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Currently selected node id
    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// Thresholds currently in effect (after clamping)
    pub fn thresholds(&self) -> FilterThresholds {
        self.thresholds
    }

    /// Whether a step would advance the layout
    pub fn is_active(&self) -> bool {
        self.simulation.is_active()
    }

    /// Access the underlying simulation (read-only)
    pub fn simulation(&self) -> &ForceSimulation {
        &self.simulation
    }

    /// The full, unfiltered graph
    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    /// Recompute the visible subgraph for the current thresholds
    pub fn visible(&self) -> VisibleGraph {
        filter(&self.graph, self.thresholds)
    }

    /// Drive the simulation until it settles or the cap is reached;
    /// returns the number of steps run
    pub fn run_to_convergence(&mut self, max_steps: usize) -> usize {
        self.simulation.run_to_convergence(max_steps)
    }
}
