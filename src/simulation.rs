//! Force-directed layout simulation
//!
//! Iteratively evolves 2D positions for the visible subgraph under four
//! competing forces: link springs, pairwise charge repulsion, a weak
//! centering pull and a soft collision constraint. The simulation never owns
//! a scheduling loop - an external redraw loop calls [`ForceSimulation::tick`]
//! once per frame, and all mutations (thresholds, drag pins) are applied
//! between ticks.

use std::collections::HashMap;

use crate::filter::VisibleGraph;
use crate::graph::Node;

/// Repulsion strength between every node pair
pub const DEFAULT_CHARGE_STRENGTH: f32 = 150.0;

/// Spring constant for link forces
pub const DEFAULT_LINK_STIFFNESS: f32 = 0.1;

/// Centering pull strength
pub const DEFAULT_CENTER_STRENGTH: f32 = 0.03;

/// Collision overlap correction strength
pub const DEFAULT_COLLISION_STRENGTH: f32 = 0.7;

/// Velocity decay factor (friction), applied each tick
pub const DEFAULT_VELOCITY_DECAY: f32 = 0.6;

/// Minimum alpha before a settled simulation stops moving
pub const DEFAULT_ALPHA_MIN: f32 = 0.001;

/// Number of ticks the cooling schedule is tuned for (D3 uses 300)
pub const DEFAULT_ALPHA_DECAY_TICKS: f32 = 300.0;

/// Maximum per-tick speed (prevents numerical explosion)
pub const DEFAULT_MAX_VELOCITY: f32 = 50.0;

/// Minimum distance for force calculations (avoids singularity)
pub const DISTANCE_MIN: f32 = 1.0;

/// Cutoff distance for charge repulsion
pub const DISTANCE_MAX: f32 = 500.0;

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: f32 = 960.0;

/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: f32 = 600.0;

/// Node radius in pixels, scaled by connectivity
pub fn node_radius(degree: u32) -> f32 {
    (degree as f32).sqrt() * 3.0 + 5.0
}

/// Target separation for an edge: stronger interactions pull shorter
pub fn link_distance(weight: f32) -> f32 {
    100.0 / (weight * 100.0)
}

/// Configuration for the force simulation
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Canvas width; positions are clamped into it
    pub width: f32,
    /// Canvas height; positions are clamped into it
    pub height: f32,
    /// Pairwise repulsion strength
    pub charge_strength: f32,
    /// Link spring constant
    pub link_stiffness: f32,
    /// Pull toward the canvas center
    pub center_strength: f32,
    /// Overlap correction strength
    pub collision_strength: f32,
    /// Velocity decay (friction)
    pub velocity_decay: f32,
    /// Alpha value a restart resets to
    pub alpha: f32,
    /// Alpha below which the simulation is settled
    pub alpha_min: f32,
    /// Geometric cooling rate per tick
    pub alpha_decay: f32,
    /// Per-tick speed limit
    pub max_velocity: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            charge_strength: DEFAULT_CHARGE_STRENGTH,
            link_stiffness: DEFAULT_LINK_STIFFNESS,
            center_strength: DEFAULT_CENTER_STRENGTH,
            collision_strength: DEFAULT_COLLISION_STRENGTH,
            velocity_decay: DEFAULT_VELOCITY_DECAY,
            alpha: 1.0,
            alpha_min: DEFAULT_ALPHA_MIN,
            // Decay formula from D3: 1 - alpha_min^(1/300)
            alpha_decay: 1.0 - DEFAULT_ALPHA_MIN.powf(1.0 / DEFAULT_ALPHA_DECAY_TICKS),
            max_velocity: DEFAULT_MAX_VELOCITY,
        }
    }
}

/// A node with position and velocity for simulation
#[derive(Debug, Clone)]
pub struct SimNode {
    /// Node id (from the visible graph)
    pub id: String,
    /// Human-readable label for display
    pub label: String,
    /// Connectivity count, carried for radius and label rules
    pub degree: u32,
    /// Rendered radius in pixels
    pub radius: f32,
    /// Position
    pub x: f32,
    pub y: f32,
    /// Velocity
    pub vx: f32,
    pub vy: f32,
    /// Pinned position override; non-null only while actively pinned
    pub fx: Option<f32>,
    pub fy: Option<f32>,
}

impl SimNode {
    /// Seed a node on the entry circle around the canvas center.
    ///
    /// Deterministic in (index, total), so the same visible set always
    /// seeds the same way.
    fn seeded(node: &Node, index: usize, total: usize, config: &SimulationConfig) -> Self {
        let angle = 2.0 * std::f32::consts::PI * (index as f32) / (total.max(1) as f32);
        let ring = config.width.min(config.height) / 4.0;

        Self {
            id: node.id.clone(),
            label: node.label.clone(),
            degree: node.degree,
            radius: node_radius(node.degree),
            x: config.width / 2.0 + ring * angle.cos(),
            y: config.height / 2.0 + ring * angle.sin(),
            vx: 0.0,
            vy: 0.0,
            fx: None,
            fy: None,
        }
    }

    /// Whether this node is currently pinned
    pub fn is_pinned(&self) -> bool {
        self.fx.is_some() && self.fy.is_some()
    }
}

/// An edge for simulation (indices into the node array)
#[derive(Debug, Clone)]
pub struct SimEdge {
    pub source: usize,
    pub target: usize,
    /// Declaration id, carried through to the scene output
    pub id: i64,
    /// Interaction weight, used for stroke styling
    pub weight: f32,
    /// Spring rest length derived from the weight
    pub distance: f32,
}

/// CPU force simulation over the visible subgraph
pub struct ForceSimulation {
    nodes: Vec<SimNode>,
    edges: Vec<SimEdge>,
    index: HashMap<String, usize>,
    config: SimulationConfig,
    alpha: f32,
    alpha_target: f32,
    running: bool,
}

impl ForceSimulation {
    /// Create a simulation seeded from the visible subgraph
    pub fn new(visible: &VisibleGraph, config: SimulationConfig) -> Self {
        let mut sim = Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
            alpha: config.alpha,
            alpha_target: 0.0,
            running: true,
            config,
        };
        sim.rebuild(visible);
        sim
    }

    /// Replace the active visible set.
    ///
    /// Nodes that remain visible keep their position, velocity and pin;
    /// entrants are seeded on the entry circle. The simulation reheats so
    /// the new set redistributes.
    pub fn reconfigure(&mut self, visible: &VisibleGraph) {
        self.rebuild(visible);
        self.reheat();
    }

    fn rebuild(&mut self, visible: &VisibleGraph) {
        let total = visible.nodes.len();
        let previous: HashMap<String, SimNode> = self
            .nodes
            .drain(..)
            .map(|n| (n.id.clone(), n))
            .collect();

        self.nodes = visible
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| match previous.get(&node.id) {
                Some(old) => SimNode {
                    id: node.id.clone(),
                    label: node.label.clone(),
                    degree: node.degree,
                    radius: node_radius(node.degree),
                    x: old.x,
                    y: old.y,
                    vx: old.vx,
                    vy: old.vy,
                    fx: old.fx,
                    fy: old.fy,
                },
                None => SimNode::seeded(node, i, total, &self.config),
            })
            .collect();

        self.index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();

        // Dangling endpoints have already been filtered out, but the index
        // mapping tolerates them anyway
        self.edges = visible
            .edges
            .iter()
            .filter_map(|e| {
                let source = *self.index.get(&e.source)?;
                let target = *self.index.get(&e.target)?;
                Some(SimEdge {
                    source,
                    target,
                    id: e.id,
                    weight: e.weight,
                    distance: link_distance(e.weight),
                })
            })
            .collect();
    }

    /// Run one simulation tick.
    ///
    /// No-op once settled (alpha below minimum with no resting target) or
    /// after [`stop`](Self::stop).
    pub fn tick(&mut self) {
        if !self.is_active() || self.nodes.is_empty() {
            return;
        }

        self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;

        self.apply_link_force();
        self.apply_charge_force();
        self.apply_center_force();
        self.apply_collision_force();
        self.integrate();
    }

    /// Apply spring force along every visible edge, scaled by alpha
    fn apply_link_force(&mut self) {
        for edge in &self.edges {
            let (source, target) = (edge.source, edge.target);

            let dx = self.nodes[target].x - self.nodes[source].x;
            let dy = self.nodes[target].y - self.nodes[source].y;
            let dist = (dx * dx + dy * dy).sqrt().max(DISTANCE_MIN);

            // Hooke's law toward the weight-derived rest length
            let stretch = dist - edge.distance;
            let force = self.config.link_stiffness * stretch * self.alpha / dist;

            let fx = force * dx;
            let fy = force * dy;

            self.nodes[source].vx += fx;
            self.nodes[source].vy += fy;
            self.nodes[target].vx -= fx;
            self.nodes[target].vy -= fy;
        }
    }

    /// Apply uniform repulsion between all node pairs, scaled by alpha
    fn apply_charge_force(&mut self) {
        let n = self.nodes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = self.nodes[j].x - self.nodes[i].x;
                let dy = self.nodes[j].y - self.nodes[i].y;
                let dist = (dx * dx + dy * dy).sqrt().max(DISTANCE_MIN);
                if dist > DISTANCE_MAX {
                    continue;
                }

                // Inverse-square falloff, repulsive
                let force = self.config.charge_strength * self.alpha / (dist * dist);
                let fx = force * dx / dist;
                let fy = force * dy / dist;

                self.nodes[i].vx -= fx;
                self.nodes[i].vy -= fy;
                self.nodes[j].vx += fx;
                self.nodes[j].vy += fy;
            }
        }
    }

    /// Apply the weak pull toward the canvas center, scaled by alpha
    fn apply_center_force(&mut self) {
        let cx = self.config.width / 2.0;
        let cy = self.config.height / 2.0;
        for node in &mut self.nodes {
            node.vx += (cx - node.x) * self.config.center_strength * self.alpha;
            node.vy += (cy - node.y) * self.config.center_strength * self.alpha;
        }
    }

    /// Push apart overlapping nodes; not alpha-scaled so settled layouts
    /// still resolve overlap introduced by a drag
    fn apply_collision_force(&mut self) {
        let n = self.nodes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let mut dx = self.nodes[j].x - self.nodes[i].x;
                let mut dy = self.nodes[j].y - self.nodes[i].y;
                let mut dist_sq = dx * dx + dy * dy;
                if dist_sq < 1e-12 {
                    // Coincident nodes: separate along a deterministic axis
                    dx = 1e-3 * ((j - i) as f32);
                    dy = 1e-3;
                    dist_sq = dx * dx + dy * dy;
                }

                let min_dist = self.nodes[i].radius + self.nodes[j].radius;
                let dist = dist_sq.sqrt();
                if dist >= min_dist {
                    continue;
                }

                let push = (min_dist - dist) / dist * self.config.collision_strength * 0.5;
                let fx = dx * push;
                let fy = dy * push;

                self.nodes[i].vx -= fx;
                self.nodes[i].vy -= fy;
                self.nodes[j].vx += fx;
                self.nodes[j].vy += fy;
            }
        }
    }

    /// Integrate velocities into positions and clamp into the canvas.
    ///
    /// Pinned nodes skip integration entirely: position is forced to the
    /// pin and velocity zeroed, so forces accumulated this tick never move
    /// them (they still pushed on everything else above).
    fn integrate(&mut self) {
        let decay = self.config.velocity_decay;
        let max_v = self.config.max_velocity;

        for node in &mut self.nodes {
            if let (Some(fx), Some(fy)) = (node.fx, node.fy) {
                node.x = fx;
                node.y = fy;
                node.vx = 0.0;
                node.vy = 0.0;
                continue;
            }

            node.vx *= decay;
            node.vy *= decay;

            let speed = (node.vx * node.vx + node.vy * node.vy).sqrt();
            if speed > max_v {
                let scale = max_v / speed;
                node.vx *= scale;
                node.vy *= scale;
            }

            node.x += node.vx;
            node.y += node.vy;

            // Post-step constraint, not a force: velocity is untouched
            let r = node.radius;
            node.x = node.x.clamp(r, (self.config.width - r).max(r));
            node.y = node.y.clamp(r, (self.config.height - r).max(r));
        }
    }

    /// Pin a node at the given position (drag).
    ///
    /// Coordinates are clamped into the canvas so the boundary invariant
    /// holds for pinned nodes too. The position takes effect immediately.
    pub fn pin(&mut self, id: &str, x: f32, y: f32) {
        let (width, height) = (self.config.width, self.config.height);
        if let Some(&i) = self.index.get(id) {
            let node = &mut self.nodes[i];
            let r = node.radius;
            let px = x.clamp(r, (width - r).max(r));
            let py = y.clamp(r, (height - r).max(r));
            node.fx = Some(px);
            node.fy = Some(py);
            node.x = px;
            node.y = py;
            node.vx = 0.0;
            node.vy = 0.0;
        }
    }

    /// Release a node's pin, returning it to free simulation
    pub fn unpin(&mut self, id: &str) {
        if let Some(&i) = self.index.get(id) {
            self.nodes[i].fx = None;
            self.nodes[i].fy = None;
        }
    }

    /// Set the resting energy floor (raised during drag, 0 otherwise)
    pub fn set_alpha_target(&mut self, target: f32) {
        self.alpha_target = target.clamp(0.0, 1.0);
    }

    /// Reset alpha to its restart value and resume stepping
    pub fn reheat(&mut self) {
        self.alpha = self.config.alpha;
        self.running = true;
    }

    /// Halt stepping. Idempotent; positions are left intact.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resume stepping after a stop
    pub fn restart(&mut self) {
        self.running = true;
    }

    /// Whether a tick would advance the layout
    pub fn is_active(&self) -> bool {
        self.running && (self.alpha >= self.config.alpha_min || self.alpha_target > 0.0)
    }

    /// Whether the layout has settled
    pub fn is_converged(&self) -> bool {
        self.alpha < self.config.alpha_min && self.alpha_target == 0.0
    }

    /// Drive the simulation until it settles or the safety cap is reached.
    ///
    /// Returns the number of ticks run.
    pub fn run_to_convergence(&mut self, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while self.is_active() && ticks < max_ticks {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// Current alpha value
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Current resting energy floor
    pub fn alpha_target(&self) -> f32 {
        self.alpha_target
    }

    /// Simulation nodes, in visible-set order
    pub fn nodes(&self) -> &[SimNode] {
        &self.nodes
    }

    /// Simulation edges, in visible-set order
    pub fn edges(&self) -> &[SimEdge] {
        &self.edges
    }

    /// Whether the id is part of the active visible set
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&SimNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Current position of a node
    pub fn position_of(&self, id: &str) -> Option<(f32, f32)> {
        self.node(id).map(|n| (n.x, n.y))
    }

    /// Canvas configuration in use
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::VisibleGraph;
    use crate::graph::{Edge, Node};

    fn node(id: &str, degree: u32) -> Node {
        let mut n = Node::new(id, id.to_lowercase());
        n.degree = degree;
        n
    }

    fn edge(source: &str, target: &str, id: i64, weight: f32) -> Edge {
        Edge {
            source: source.to_string(),
            target: target.to_string(),
            id,
            weight,
        }
    }

    fn pair_graph(weight: f32) -> VisibleGraph {
        VisibleGraph {
            nodes: vec![node("A", 1), node("B", 1)],
            edges: vec![edge("A", "B", 0, weight)],
        }
    }

    #[test]
    fn alpha_decays_strictly_while_unperturbed() {
        let mut sim = ForceSimulation::new(&pair_graph(0.001), SimulationConfig::default());
        let mut prev = sim.alpha();
        for _ in 0..50 {
            sim.tick();
            assert!(sim.alpha() < prev, "alpha must strictly decrease");
            prev = sim.alpha();
        }
    }

    #[test]
    fn linked_nodes_pull_toward_short_rest_length() {
        // Heavy weight => tiny rest length, so the pair must close in
        let mut sim = ForceSimulation::new(&pair_graph(0.01), SimulationConfig::default());
        let dist = |sim: &ForceSimulation| {
            let n = sim.nodes();
            let (dx, dy) = (n[1].x - n[0].x, n[1].y - n[0].y);
            (dx * dx + dy * dy).sqrt()
        };

        let initial = dist(&sim);
        sim.run_to_convergence(2000);
        assert!(
            dist(&sim) < initial,
            "spring should shorten the pair: {} -> {}",
            initial,
            dist(&sim)
        );
    }

    #[test]
    fn pinned_node_holds_position_exactly() {
        let mut sim = ForceSimulation::new(&pair_graph(0.001), SimulationConfig::default());
        sim.pin("A", 50.0, 50.0);

        for _ in 0..200 {
            sim.tick();
            let a = sim.node("A").unwrap();
            assert_eq!(a.x, 50.0);
            assert_eq!(a.y, 50.0);
            assert!(a.is_pinned());
        }
    }

    #[test]
    fn release_resumes_free_evolution() {
        let mut sim = ForceSimulation::new(&pair_graph(0.001), SimulationConfig::default());
        sim.pin("A", 50.0, 50.0);
        for _ in 0..10 {
            sim.tick();
        }

        sim.unpin("A");
        sim.reheat();
        for _ in 0..50 {
            sim.tick();
        }

        let a = sim.node("A").unwrap();
        assert!(a.fx.is_none() && a.fy.is_none());
        assert!(
            (a.x - 50.0).abs() > f32::EPSILON || (a.y - 50.0).abs() > f32::EPSILON,
            "released node should move under forces"
        );
    }

    #[test]
    fn pinned_node_still_repels_neighbors() {
        let visible = VisibleGraph {
            nodes: vec![node("A", 1), node("B", 1)],
            edges: Vec::new(),
        };
        let mut sim = ForceSimulation::new(&visible, SimulationConfig::default());
        let center = (
            sim.config().width / 2.0,
            sim.config().height / 2.0,
        );
        sim.pin("A", center.0, center.1);
        sim.pin("B", center.0 + 10.0, center.1);
        sim.unpin("B");
        sim.reheat();

        let before = {
            let b = sim.node("B").unwrap();
            (b.x - center.0).hypot(b.y - center.1)
        };
        for _ in 0..50 {
            sim.tick();
        }
        let after = {
            let b = sim.node("B").unwrap();
            (b.x - center.0).hypot(b.y - center.1)
        };
        assert!(after > before, "repulsion should push B off the pin");
    }

    #[test]
    fn positions_stay_inside_canvas() {
        let nodes: Vec<Node> = (0..20).map(|i| node(&format!("N{i}"), (i % 5) as u32)).collect();
        let edges: Vec<Edge> = (0..19)
            .map(|i| edge(&format!("N{i}"), &format!("N{}", i + 1), i, 0.0008))
            .collect();
        let visible = VisibleGraph { nodes, edges };
        let mut sim = ForceSimulation::new(&visible, SimulationConfig::default());

        for _ in 0..300 {
            sim.tick();
            for n in sim.nodes() {
                assert!(n.x >= n.radius && n.x <= sim.config().width - n.radius);
                assert!(n.y >= n.radius && n.y <= sim.config().height - n.radius);
            }
        }
    }

    #[test]
    fn pin_coordinates_are_clamped_into_canvas() {
        let mut sim = ForceSimulation::new(&pair_graph(0.001), SimulationConfig::default());
        sim.pin("A", -100.0, 1e6);

        let a = sim.node("A").unwrap();
        assert_eq!(a.x, a.radius);
        assert_eq!(a.y, sim.config().height - a.radius);
    }

    #[test]
    fn converges_and_displacement_shrinks() {
        let mut sim = ForceSimulation::new(&pair_graph(0.001), SimulationConfig::default());

        sim.tick();
        let early: Vec<(f32, f32)> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();
        sim.tick();
        let early_disp: f32 = sim
            .nodes()
            .iter()
            .zip(&early)
            .map(|(n, (x, y))| (n.x - x).hypot(n.y - y))
            .fold(0.0, f32::max);

        let ticks = sim.run_to_convergence(10_000);
        assert!(sim.is_converged(), "should settle within the cap");
        assert!(ticks < 10_000);

        let late: Vec<(f32, f32)> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();
        sim.reheat(); // re-enable stepping without resetting positions
        sim.alpha = sim.config.alpha_min * 2.0; // one near-settled step
        sim.tick();
        let late_disp: f32 = sim
            .nodes()
            .iter()
            .zip(&late)
            .map(|(n, (x, y))| (n.x - x).hypot(n.y - y))
            .fold(0.0, f32::max);

        assert!(
            late_disp <= early_disp,
            "per-step displacement should shrink: early {early_disp} late {late_disp}"
        );
    }

    #[test]
    fn alpha_target_keeps_the_simulation_hot() {
        let mut sim = ForceSimulation::new(&pair_graph(0.001), SimulationConfig::default());
        sim.set_alpha_target(0.3);
        for _ in 0..1000 {
            sim.tick();
        }
        assert!(sim.is_active());
        assert!((sim.alpha() - 0.3).abs() < 0.01, "alpha rests near the target");

        sim.set_alpha_target(0.0);
        sim.run_to_convergence(5000);
        assert!(sim.is_converged());
    }

    #[test]
    fn stop_is_idempotent_and_keeps_positions() {
        let mut sim = ForceSimulation::new(&pair_graph(0.001), SimulationConfig::default());
        for _ in 0..10 {
            sim.tick();
        }
        let before: Vec<(f32, f32)> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();

        sim.stop();
        sim.stop();
        sim.tick();
        let after: Vec<(f32, f32)> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();
        assert_eq!(before, after);

        sim.restart();
        assert!(sim.is_active());
    }

    #[test]
    fn reconfigure_keeps_survivors_and_reseeds_entrants() {
        let mut sim = ForceSimulation::new(&pair_graph(0.001), SimulationConfig::default());
        for _ in 0..20 {
            sim.tick();
        }
        let (ax, ay) = sim.position_of("A").unwrap();

        let next = VisibleGraph {
            nodes: vec![node("A", 1), node("C", 3)],
            edges: Vec::new(),
        };
        sim.reconfigure(&next);

        assert_eq!(sim.position_of("A"), Some((ax, ay)));
        assert!(sim.contains("C"));
        assert!(!sim.contains("B"));
        assert_eq!(sim.alpha(), 1.0, "reconfigure reheats");
        assert_eq!(sim.edges().len(), 0);
    }

    #[test]
    fn empty_graph_is_harmless() {
        let mut sim = ForceSimulation::new(&VisibleGraph::default(), SimulationConfig::default());
        sim.tick();
        sim.run_to_convergence(100);
        assert!(sim.nodes().is_empty());
    }

    #[test]
    fn single_node_drifts_toward_center() {
        let visible = VisibleGraph {
            nodes: vec![node("ONLY", 0)],
            edges: Vec::new(),
        };
        let mut sim = ForceSimulation::new(&visible, SimulationConfig::default());
        let center = (sim.config().width / 2.0, sim.config().height / 2.0);

        let before = {
            let n = &sim.nodes()[0];
            (n.x - center.0).hypot(n.y - center.1)
        };
        sim.run_to_convergence(2000);
        let after = {
            let n = &sim.nodes()[0];
            (n.x - center.0).hypot(n.y - center.1)
        };
        assert!(after < before, "center force should pull inward");
    }

    #[test]
    fn dangling_edge_in_visible_set_is_dropped() {
        let visible = VisibleGraph {
            nodes: vec![node("A", 1)],
            edges: vec![edge("A", "GHOST", 0, 0.001)],
        };
        let sim = ForceSimulation::new(&visible, SimulationConfig::default());
        assert_eq!(sim.nodes().len(), 1);
        assert!(sim.edges().is_empty());
    }
}
