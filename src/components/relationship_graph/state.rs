use super::camera::Camera;
use super::controller::Controller;
use super::model::{GraphModel, Node};
use super::sim::{self, LayoutRun, SimulationParams};
use super::types::{GraphData, RelationKind};

/// Single owner of the diagram state.
///
/// The simulation writes node positions and velocities, the interaction
/// methods write camera/selection/hover, and the renderer only ever takes
/// `&GraphState`. The component layer forwards DOM events here and owns
/// nothing itself.
pub struct GraphState {
	pub model: GraphModel,
	pub camera: Camera,
	pub interaction: Controller,
	pub params: SimulationParams,
	pub layout: LayoutRun,
	pub width: f64,
	pub height: f64,
}

/// Cloned projection of the selected character for the info panel.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionInfo {
	pub name: String,
	pub image_url: Option<String>,
	/// Incident relationships, resolved to the other endpoint's name.
	pub relations: Vec<(RelationKind, String)>,
}

impl GraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		Self {
			model: GraphModel::build(data, width, height),
			camera: Camera::default(),
			interaction: Controller::default(),
			params: SimulationParams::default(),
			layout: LayoutRun::default(),
			width,
			height,
		}
	}

	/// Rebuild nodes and edges for new input data. Any in-flight layout
	/// run is discarded and interaction state is dropped with the old
	/// node indices.
	pub fn set_data(&mut self, data: &GraphData) {
		self.model = GraphModel::build(data, self.width, self.height);
		self.interaction.clear();
		self.layout.cancel();
		log::debug!(
			"graph rebuilt: {} nodes, {} edges",
			self.model.nodes.len(),
			self.model.edges.len()
		);
	}

	/// Advance one animation frame: run one layout tick if a run is
	/// active. Returns whether the layout moved.
	pub fn frame(&mut self) -> bool {
		if !self.layout.take_tick() {
			return false;
		}
		sim::tick(&mut self.model, &self.params, self.width, self.height);
		if !self.layout.is_active() {
			log::debug!("layout run finished");
		}
		true
	}

	/// Start (or restart) a layout run; a previous run's remaining ticks
	/// are discarded.
	pub fn relayout(&mut self) {
		self.layout.start(self.params.budget);
		log::info!("layout run started ({} ticks)", self.params.budget);
	}

	pub fn zoom_in(&mut self) {
		self.camera.zoom_in();
	}

	pub fn zoom_out(&mut self) {
		self.camera.zoom_out();
	}

	pub fn reset_view(&mut self) {
		self.camera.reset();
	}

	pub fn wheel(&mut self, delta_y: f64) {
		self.camera.wheel(delta_y);
	}

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		self.interaction.pointer_down(&self.model, &self.camera, sx, sy);
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		self.interaction.pointer_move(&self.model, &mut self.camera, sx, sy);
	}

	pub fn pointer_up(&mut self) {
		self.interaction.pointer_up();
	}

	pub fn pointer_leave(&mut self) {
		self.interaction.pointer_leave();
	}

	/// Zoom level for the toolbar readout.
	pub fn zoom_percent(&self) -> u32 {
		(self.camera.zoom * 100.0).round() as u32
	}

	pub fn selected_node(&self) -> Option<&Node> {
		self.interaction.selected.and_then(|i| self.model.nodes.get(i))
	}

	/// Info-panel projection for the selected character, if any.
	pub fn selection_info(&self) -> Option<SelectionInfo> {
		let idx = self.interaction.selected?;
		let node = self.model.nodes.get(idx)?;
		let relations = self
			.model
			.edges
			.iter()
			.filter_map(|edge| {
				let other = if edge.source == idx {
					edge.target
				} else if edge.target == idx {
					edge.source
				} else {
					return None;
				};
				Some((edge.kind, self.model.nodes[other].name.clone()))
			})
			.collect();
		Some(SelectionInfo {
			name: node.name.clone(),
			image_url: node.image_url.clone(),
			relations,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::relationship_graph::types::{Character, Relationship};

	fn sample_data() -> GraphData {
		let character = |id: &str, name: &str| Character {
			id: id.into(),
			name: name.into(),
			image_url: None,
		};
		let relationship = |from: &str, to: &str, kind| Relationship {
			character_id: from.into(),
			related_character_id: to.into(),
			kind,
		};
		GraphData {
			characters: vec![
				character("a", "Alice"),
				character("b", "Bob"),
				character("c", "Carol"),
			],
			relationships: vec![
				relationship("a", "b", RelationKind::Ally),
				relationship("c", "a", RelationKind::Rival),
				relationship("b", "c", RelationKind::Friend),
			],
		}
	}

	#[test]
	fn relayout_runs_for_exactly_the_budget() {
		let mut state = GraphState::new(&sample_data(), 800.0, 500.0);
		assert!(!state.frame());

		state.relayout();
		let mut frames = 0;
		while state.frame() {
			frames += 1;
		}
		assert_eq!(frames, 200);
		assert!(!state.layout.is_active());
	}

	#[test]
	fn back_to_back_relayouts_only_run_the_second_budget() {
		let mut state = GraphState::new(&sample_data(), 800.0, 500.0);
		state.relayout();
		for _ in 0..60 {
			assert!(state.frame());
		}
		state.relayout();
		let mut frames = 0;
		while state.frame() {
			frames += 1;
		}
		assert_eq!(frames, 200);
	}

	#[test]
	fn set_data_cancels_the_run_and_drops_selection() {
		let mut state = GraphState::new(&sample_data(), 800.0, 500.0);
		state.relayout();
		let (sx, sy) = (state.model.nodes[0].x, state.model.nodes[0].y);
		state.pointer_down(sx, sy);
		assert!(state.selected_node().is_some());

		state.set_data(&GraphData::default());
		assert!(!state.layout.is_active());
		assert!(state.selected_node().is_none());
		assert!(state.model.is_empty());
		// an empty model must still frame without panicking
		assert!(!state.frame());
	}

	#[test]
	fn selection_info_resolves_incident_edges() {
		let mut state = GraphState::new(&sample_data(), 800.0, 500.0);
		let (sx, sy) = (state.model.nodes[0].x, state.model.nodes[0].y);
		state.pointer_down(sx, sy);

		let info = state.selection_info().unwrap();
		assert_eq!(info.name, "Alice");
		assert_eq!(
			info.relations,
			vec![
				(RelationKind::Ally, "Bob".to_string()),
				(RelationKind::Rival, "Carol".to_string()),
			]
		);

		state.pointer_down(-1000.0, -1000.0);
		assert_eq!(state.selection_info(), None);
	}

	#[test]
	fn zoom_percent_tracks_the_camera() {
		let mut state = GraphState::new(&sample_data(), 800.0, 500.0);
		assert_eq!(state.zoom_percent(), 100);
		state.zoom_in();
		assert_eq!(state.zoom_percent(), 120);
		state.wheel(1.0);
		assert_eq!(state.zoom_percent(), 110);
		state.reset_view();
		assert_eq!(state.zoom_percent(), 100);
	}
}
