use super::model::GraphModel;

/// Force-solver tuning.
///
/// The defaults produce a readable, stable layout for campaign-sized
/// graphs; they make no claim to physical accuracy.
#[derive(Clone, Copy, Debug)]
pub struct SimulationParams {
	/// Pairwise repulsion scale, applied as `repulsion / dist²`.
	pub repulsion: f64,
	/// Linear spring scale along edges, applied as `dist * spring`.
	pub spring: f64,
	/// Per-axis pull toward the viewport center.
	pub gravity: f64,
	/// Velocity retained after each tick.
	pub damping: f64,
	/// Velocity-to-position step size.
	pub step: f64,
	/// Margin nodes may not leave on any side.
	pub padding: f64,
	/// Ticks per layout run. Fixed budget, no convergence exit: layout
	/// cost stays bounded no matter how large the graph is, and very
	/// dense graphs are simply left at their best effort.
	pub budget: u32,
}

impl Default for SimulationParams {
	fn default() -> Self {
		Self {
			repulsion: 5000.0,
			spring: 0.01,
			gravity: 0.001,
			damping: 0.9,
			step: 0.1,
			padding: 50.0,
			budget: 200,
		}
	}
}

/// Advance the layout by one tick.
///
/// Forces are accumulated against a snapshot of the previous tick's
/// positions, so the outcome never depends on node order within the tick.
pub fn tick(model: &mut GraphModel, params: &SimulationParams, width: f64, height: f64) {
	let snapshot: Vec<(f64, f64)> = model.nodes.iter().map(|n| (n.x, n.y)).collect();
	let (center_x, center_y) = (width / 2.0, height / 2.0);
	let GraphModel { nodes, edges } = model;

	for (i, node) in nodes.iter_mut().enumerate() {
		let (x, y) = snapshot[i];
		let (mut fx, mut fy) = (0.0, 0.0);

		// Repulsion from every other node.
		for (j, &(ox, oy)) in snapshot.iter().enumerate() {
			if i == j {
				continue;
			}
			let (dx, dy) = (x - ox, y - oy);
			// Floor the distance so coincident nodes cannot divide by zero.
			let dist = (dx * dx + dy * dy).sqrt().max(1.0);
			let force = params.repulsion / (dist * dist);
			fx += dx / dist * force;
			fy += dy / dist * force;
		}

		// Spring attraction along incident edges.
		for edge in edges.iter() {
			let other = if edge.source == i {
				edge.target
			} else if edge.target == i {
				edge.source
			} else {
				continue;
			};
			let (ox, oy) = snapshot[other];
			let (dx, dy) = (ox - x, oy - y);
			let dist = (dx * dx + dy * dy).sqrt().max(1.0);
			let force = dist * params.spring;
			fx += dx / dist * force;
			fy += dy / dist * force;
		}

		// Weak centering gravity, per axis.
		fx += (center_x - x) * params.gravity;
		fy += (center_y - y) * params.gravity;

		node.vx += fx;
		node.vy += fy;
		node.x = x + node.vx * params.step;
		node.y = y + node.vy * params.step;
		node.vx *= params.damping;
		node.vy *= params.damping;

		// Clamp to the canvas; velocity is kept, a node pinned at a wall
		// releases it once the forces turn around.
		node.x = node.x.min(width - params.padding).max(params.padding);
		node.y = node.y.min(height - params.padding).max(params.padding);
	}
}

/// A frame-budgeted layout run.
///
/// One tick is consumed per animation frame. Starting a run while another
/// is active discards the remaining budget of the old run, which is all
/// the cancellation a single counter needs.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutRun {
	remaining: u32,
}

impl LayoutRun {
	pub fn start(&mut self, budget: u32) {
		self.remaining = budget;
	}

	pub fn cancel(&mut self) {
		self.remaining = 0;
	}

	pub fn is_active(&self) -> bool {
		self.remaining > 0
	}

	/// Consume one tick from the budget; `false` once the run is idle.
	pub fn take_tick(&mut self) -> bool {
		if self.remaining == 0 {
			return false;
		}
		self.remaining -= 1;
		true
	}
}
