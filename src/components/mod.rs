//! Reusable UI components.

pub mod relationship_graph;
