//! bioforce - an interactive force-directed layout engine for biological
//! interaction networks.
//!
//! This crate parses a textual graph description, classifies nodes into
//! biological categories, filters the graph by user-adjustable thresholds
//! and lays out the visible subgraph with an iterative force simulation the
//! user can perturb by dragging nodes.

pub mod category;
pub mod engine;
pub mod filter;
pub mod graph;
pub mod interaction;
pub mod parser;
pub mod scene;
pub mod simulation;
