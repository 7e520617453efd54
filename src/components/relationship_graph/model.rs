use std::collections::HashMap;
use std::f64::consts::PI;

use super::types::{GraphData, RelationKind};

/// Node disc radius in world units.
pub const NODE_RADIUS: f64 = 30.0;
/// World-space radius for pointer hit-testing, same as the drawn disc.
pub const HIT_RADIUS: f64 = 30.0;

/// One simulated character: world position plus velocity.
#[derive(Clone, Debug)]
pub struct Node {
	pub id: String,
	pub name: String,
	pub image_url: Option<String>,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
}

/// One valid relationship between two nodes, by node index.
#[derive(Clone, Debug)]
pub struct Edge {
	pub source: usize,
	pub target: usize,
	pub kind: RelationKind,
}

/// Node and edge sets derived from the input data.
///
/// Rebuilt whenever the character or relationship list changes; positions
/// are owned by the simulation and by nobody else afterwards.
#[derive(Clone, Debug, Default)]
pub struct GraphModel {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

impl GraphModel {
	/// Build nodes on an even ring around the viewport center and keep
	/// only the relationships whose endpoints both exist.
	pub fn build(data: &GraphData, width: f64, height: f64) -> Self {
		let (center_x, center_y) = (width / 2.0, height / 2.0);
		let ring = width.min(height) * 0.3;
		let count = data.characters.len();

		let mut id_to_idx = HashMap::new();
		let nodes: Vec<Node> = data
			.characters
			.iter()
			.enumerate()
			.map(|(i, character)| {
				let angle = 2.0 * PI * i as f64 / count as f64;
				id_to_idx.insert(character.id.clone(), i);
				Node {
					id: character.id.clone(),
					name: character.name.clone(),
					image_url: character.image_url.clone(),
					x: center_x + ring * angle.cos(),
					y: center_y + ring * angle.sin(),
					vx: 0.0,
					vy: 0.0,
				}
			})
			.collect();

		// Relationships with a missing endpoint are dropped silently.
		let edges = data
			.relationships
			.iter()
			.filter_map(|rel| {
				let source = *id_to_idx.get(&rel.character_id)?;
				let target = *id_to_idx.get(&rel.related_character_id)?;
				Some(Edge {
					source,
					target,
					kind: rel.kind,
				})
			})
			.collect();

		Self { nodes, edges }
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relationship_graph::types::{Character, Relationship};

	fn character(id: &str, name: &str) -> Character {
		Character {
			id: id.into(),
			name: name.into(),
			image_url: None,
		}
	}

	fn relationship(from: &str, to: &str, kind: RelationKind) -> Relationship {
		Relationship {
			character_id: from.into(),
			related_character_id: to.into(),
			kind,
		}
	}

	#[test]
	fn two_characters_one_relationship() {
		let data = GraphData {
			characters: vec![character("a", "Alice"), character("b", "Bob")],
			relationships: vec![relationship("a", "b", RelationKind::Ally)],
		};
		let model = GraphModel::build(&data, 800.0, 500.0);

		assert_eq!(model.nodes.len(), 2);
		assert_eq!(model.edges.len(), 1);
		assert_eq!(model.edges[0].source, 0);
		assert_eq!(model.edges[0].target, 1);
		assert_eq!(model.edges[0].kind, RelationKind::Ally);
	}

	#[test]
	fn empty_input_builds_empty_model() {
		let model = GraphModel::build(&GraphData::default(), 800.0, 500.0);
		assert!(model.is_empty());
		assert!(model.edges.is_empty());
	}

	#[test]
	fn dangling_relationships_are_dropped() {
		let data = GraphData {
			characters: vec![character("a", "Alice"), character("b", "Bob")],
			relationships: vec![
				relationship("a", "ghost", RelationKind::Enemy),
				relationship("ghost", "b", RelationKind::Rival),
				relationship("b", "a", RelationKind::Friend),
			],
		};
		let model = GraphModel::build(&data, 800.0, 500.0);

		assert_eq!(model.nodes.len(), 2);
		assert_eq!(model.edges.len(), 1);
		assert_eq!(model.edges[0].kind, RelationKind::Friend);
	}

	#[test]
	fn nodes_start_on_a_ring_with_zero_velocity() {
		let data = GraphData {
			characters: (0..4).map(|i| character(&i.to_string(), "N")).collect(),
			relationships: vec![],
		};
		let model = GraphModel::build(&data, 800.0, 500.0);

		// radius 0.3 * min(800, 500) = 150, centered on (400, 250)
		for node in &model.nodes {
			let (dx, dy) = (node.x - 400.0, node.y - 250.0);
			assert!(((dx * dx + dy * dy).sqrt() - 150.0).abs() < 1e-9);
			assert_eq!(node.vx, 0.0);
			assert_eq!(node.vy, 0.0);
		}
		assert!((model.nodes[0].x - 550.0).abs() < 1e-9);
		assert!((model.nodes[1].y - 400.0).abs() < 1e-9);
	}
}
