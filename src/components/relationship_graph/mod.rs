mod camera;
mod component;
mod controller;
mod model;
mod palette;
mod render;
mod sim;
mod state;
mod types;

pub use component::RelationshipGraphCanvas;
pub use types::{Character, GraphData, RelationKind, Relationship};
