use super::camera::Camera;
use super::model::{GraphModel, HIT_RADIUS};

/// What the pointer is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerMode {
	#[default]
	Idle,
	/// Background drag; pan follows the pointer relative to the origin.
	Panning { origin_x: f64, origin_y: f64 },
}

/// Pointer-driven selection, hover, and panning.
///
/// Owns the selection/hover state and the pan half of the camera while a
/// drag is active. Nodes are never moved from here: selection is
/// click-only, dragging always pans the whole canvas.
#[derive(Clone, Copy, Debug, Default)]
pub struct Controller {
	pub mode: PointerMode,
	pub selected: Option<usize>,
	pub hovered: Option<usize>,
}

/// First node whose center lies within [`HIT_RADIUS`] of the world point,
/// in node order. Overlapping nodes resolve to the earliest one.
pub fn node_at(model: &GraphModel, wx: f64, wy: f64) -> Option<usize> {
	model.nodes.iter().position(|node| {
		let (dx, dy) = (node.x - wx, node.y - wy);
		(dx * dx + dy * dy).sqrt() < HIT_RADIUS
	})
}

impl Controller {
	/// On a node: select it and stay idle. Elsewhere: clear the selection
	/// and start panning from the pointer's screen position.
	pub fn pointer_down(&mut self, model: &GraphModel, camera: &Camera, sx: f64, sy: f64) {
		let (wx, wy) = camera.screen_to_world(sx, sy);
		match node_at(model, wx, wy) {
			Some(idx) => {
				self.selected = Some(idx);
			}
			None => {
				self.selected = None;
				self.mode = PointerMode::Panning {
					origin_x: sx - camera.pan_x,
					origin_y: sy - camera.pan_y,
				};
			}
		}
	}

	/// Hover tracking runs on every move, panning or not.
	pub fn pointer_move(&mut self, model: &GraphModel, camera: &mut Camera, sx: f64, sy: f64) {
		let (wx, wy) = camera.screen_to_world(sx, sy);
		self.hovered = node_at(model, wx, wy);

		if let PointerMode::Panning { origin_x, origin_y } = self.mode {
			camera.pan_x = sx - origin_x;
			camera.pan_y = sy - origin_y;
		}
	}

	pub fn pointer_up(&mut self) {
		self.mode = PointerMode::Idle;
	}

	pub fn pointer_leave(&mut self) {
		self.mode = PointerMode::Idle;
		self.hovered = None;
	}

	pub fn is_panning(&self) -> bool {
		matches!(self.mode, PointerMode::Panning { .. })
	}

	/// Drop all interaction state, for when the model is rebuilt and node
	/// indices stop meaning anything.
	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relationship_graph::types::{Character, GraphData};

	fn model_with_nodes(positions: &[(f64, f64)]) -> GraphModel {
		let data = GraphData {
			characters: positions
				.iter()
				.enumerate()
				.map(|(i, _)| Character {
					id: i.to_string(),
					name: format!("Character {i}"),
					image_url: None,
				})
				.collect(),
			relationships: vec![],
		};
		let mut model = GraphModel::build(&data, 800.0, 500.0);
		for (node, &(x, y)) in model.nodes.iter_mut().zip(positions) {
			node.x = x;
			node.y = y;
		}
		model
	}

	#[test]
	fn clicking_within_the_hit_radius_selects() {
		let model = model_with_nodes(&[(400.0, 250.0)]);
		let camera = Camera::default();
		let mut ctl = Controller::default();

		ctl.pointer_down(&model, &camera, 420.0, 250.0);
		assert_eq!(ctl.selected, Some(0));
		assert_eq!(ctl.mode, PointerMode::Idle);
	}

	#[test]
	fn clicking_away_clears_selection_and_pans() {
		let model = model_with_nodes(&[(400.0, 250.0)]);
		let mut camera = Camera::default();
		let mut ctl = Controller::default();

		ctl.pointer_down(&model, &camera, 420.0, 250.0);
		ctl.pointer_down(&model, &camera, 431.0, 250.0);
		assert_eq!(ctl.selected, None);
		assert!(ctl.is_panning());

		ctl.pointer_move(&model, &mut camera, 451.0, 260.0);
		assert_eq!(camera.pan_x, 20.0);
		assert_eq!(camera.pan_y, 10.0);

		ctl.pointer_up();
		assert_eq!(ctl.mode, PointerMode::Idle);
	}

	#[test]
	fn hit_testing_respects_the_camera_transform() {
		let model = model_with_nodes(&[(400.0, 250.0)]);
		let mut camera = Camera::default();
		camera.zoom_in();
		camera.zoom_in();
		camera.pan_x = -100.0;
		camera.pan_y = 60.0;
		let mut ctl = Controller::default();

		let (sx, sy) = camera.world_to_screen(400.0, 250.0);
		ctl.pointer_down(&model, &camera, sx, sy);
		assert_eq!(ctl.selected, Some(0));

		// 31 world units off center misses regardless of zoom
		let (sx, sy) = camera.world_to_screen(431.0, 250.0);
		ctl.pointer_down(&model, &camera, sx, sy);
		assert_eq!(ctl.selected, None);
	}

	#[test]
	fn overlapping_nodes_pick_the_first_in_order() {
		let model = model_with_nodes(&[(400.0, 250.0), (405.0, 250.0)]);
		let mut ctl = Controller::default();
		ctl.pointer_down(&model, &Camera::default(), 404.0, 250.0);
		assert_eq!(ctl.selected, Some(0));
	}

	#[test]
	fn hover_tracks_during_a_pan() {
		let model = model_with_nodes(&[(400.0, 250.0)]);
		let mut camera = Camera::default();
		let mut ctl = Controller::default();

		ctl.pointer_down(&model, &camera, 600.0, 400.0);
		assert!(ctl.is_panning());
		let move_x = 400.0 + camera.pan_x;
		let move_y = 250.0 + camera.pan_y;
		ctl.pointer_move(&model, &mut camera, move_x, move_y);
		assert_eq!(ctl.hovered, Some(0));

		ctl.pointer_leave();
		assert_eq!(ctl.hovered, None);
		assert_eq!(ctl.mode, PointerMode::Idle);
	}
}
