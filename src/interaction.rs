//! Drag and selection state
//!
//! Drag is an explicit per-node state machine (Free -> Dragging -> Free)
//! keyed by node id. An active-drag set decides when the simulation's
//! resting energy is raised and lowered, so overlapping drags on multiple
//! nodes keep the layout hot until the last one ends.

use std::collections::HashSet;

use crate::simulation::ForceSimulation;

/// Resting alpha while at least one drag is active
pub const DRAG_ALPHA_TARGET: f32 = 0.3;

/// Drag lifecycle controller
#[derive(Debug, Default)]
pub struct DragController {
    active: HashSet<String>,
}

impl DragController {
    /// Create a controller with no active drags
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging a node: pin it at its current position.
    ///
    /// The first active drag raises the resting energy and reheats the
    /// simulation so the rest of the layout keeps redistributing while the
    /// node is held. Unknown ids (e.g. a node filtered out between pointer
    /// events) are ignored.
    pub fn drag_start(&mut self, sim: &mut ForceSimulation, id: &str) {
        let Some((x, y)) = sim.position_of(id) else {
            return;
        };
        if self.active.is_empty() {
            sim.set_alpha_target(DRAG_ALPHA_TARGET);
            sim.reheat();
        }
        sim.pin(id, x, y);
        self.active.insert(id.to_string());
    }

    /// Move an active drag's pin to the pointer position
    pub fn drag_move(&mut self, sim: &mut ForceSimulation, id: &str, x: f32, y: f32) {
        if self.active.contains(id) {
            sim.pin(id, x, y);
        }
    }

    /// End a drag: release the pin.
    ///
    /// When no other drag remains active the resting energy drops back to
    /// zero and the layout settles.
    pub fn drag_end(&mut self, sim: &mut ForceSimulation, id: &str) {
        if self.active.remove(id) {
            sim.unpin(id);
            if self.active.is_empty() {
                sim.set_alpha_target(0.0);
            }
        }
    }

    /// Whether the given node is being dragged
    pub fn is_dragging(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    /// Number of concurrently active drags
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

/// Selected-node state for the detail display.
///
/// Selection is orthogonal to dragging and never pins a position.
#[derive(Debug, Default)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    /// Create with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// A node was clicked: it becomes the selection
    pub fn node_clicked(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    /// Empty canvas was clicked: clear the selection
    pub fn canvas_clicked(&mut self) {
        self.selected = None;
    }

    /// Currently selected node id, if any
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::VisibleGraph;
    use crate::graph::{Edge, Node};
    use crate::simulation::SimulationConfig;

    fn sim() -> ForceSimulation {
        let mut a = Node::new("A", "a");
        a.degree = 1;
        let mut b = Node::new("B", "b");
        b.degree = 1;
        let visible = VisibleGraph {
            nodes: vec![a, b],
            edges: vec![Edge {
                source: "A".to_string(),
                target: "B".to_string(),
                id: 0,
                weight: 0.001,
            }],
        };
        ForceSimulation::new(&visible, SimulationConfig::default())
    }

    #[test]
    fn drag_start_pins_at_current_position() {
        let mut sim = sim();
        let mut drag = DragController::new();
        let (x, y) = sim.position_of("A").unwrap();

        drag.drag_start(&mut sim, "A");

        let a = sim.node("A").unwrap();
        assert_eq!(a.fx, Some(x));
        assert_eq!(a.fy, Some(y));
        assert_eq!(sim.alpha_target(), DRAG_ALPHA_TARGET);
        assert_eq!(sim.alpha(), 1.0, "first drag reheats");
    }

    #[test]
    fn drag_follows_pointer_and_holds_through_ticks() {
        let mut sim = sim();
        let mut drag = DragController::new();

        drag.drag_start(&mut sim, "A");
        drag.drag_move(&mut sim, "A", 50.0, 50.0);

        for _ in 0..20 {
            sim.tick();
            let a = sim.node("A").unwrap();
            assert_eq!((a.x, a.y), (50.0, 50.0));
        }
    }

    #[test]
    fn drag_end_releases_pin_and_lowers_target() {
        let mut sim = sim();
        let mut drag = DragController::new();

        drag.drag_start(&mut sim, "A");
        drag.drag_move(&mut sim, "A", 50.0, 50.0);
        drag.drag_end(&mut sim, "A");

        let a = sim.node("A").unwrap();
        assert!(a.fx.is_none() && a.fy.is_none());
        assert_eq!(sim.alpha_target(), 0.0);
        assert!(!drag.is_dragging("A"));
    }

    #[test]
    fn overlapping_drags_keep_target_raised_until_last_end() {
        let mut sim = sim();
        let mut drag = DragController::new();

        drag.drag_start(&mut sim, "A");
        drag.drag_start(&mut sim, "B");
        assert_eq!(drag.active_count(), 2);

        drag.drag_end(&mut sim, "A");
        assert_eq!(
            sim.alpha_target(),
            DRAG_ALPHA_TARGET,
            "B is still dragging"
        );

        drag.drag_end(&mut sim, "B");
        assert_eq!(sim.alpha_target(), 0.0);
    }

    #[test]
    fn moves_without_start_are_ignored() {
        let mut sim = sim();
        let mut drag = DragController::new();

        drag.drag_move(&mut sim, "A", 50.0, 50.0);
        let a = sim.node("A").unwrap();
        assert!(a.fx.is_none());
    }

    #[test]
    fn dragging_an_unknown_node_is_a_no_op() {
        let mut sim = sim();
        let mut drag = DragController::new();

        drag.drag_start(&mut sim, "GHOST");
        assert_eq!(drag.active_count(), 0);
        assert_eq!(sim.alpha_target(), 0.0);
    }

    #[test]
    fn duplicate_drag_end_is_harmless() {
        let mut sim = sim();
        let mut drag = DragController::new();

        drag.drag_start(&mut sim, "A");
        drag.drag_end(&mut sim, "A");
        drag.drag_end(&mut sim, "A");
        assert_eq!(sim.alpha_target(), 0.0);
    }

    #[test]
    fn selection_follows_clicks() {
        let mut selection = Selection::new();
        assert_eq!(selection.selected(), None);

        selection.node_clicked("TP53");
        assert_eq!(selection.selected(), Some("TP53"));

        selection.node_clicked("MDM2");
        assert_eq!(selection.selected(), Some("MDM2"));

        selection.canvas_clicked();
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn selection_never_pins() {
        let mut sim = sim();
        let mut selection = Selection::new();
        selection.node_clicked("A");

        let a = sim.node("A").unwrap();
        assert!(a.fx.is_none() && a.fy.is_none());
        sim.tick();
    }
}
