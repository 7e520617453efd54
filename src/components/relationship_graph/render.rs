use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::model::NODE_RADIUS;
use super::palette::relation_color;
use super::state::GraphState;
use super::types::initials;

const BACKGROUND: &str = "#0a0a0f";
const SURFACE: &str = "#1a1a24";
const SURFACE_RAISED: &str = "#3b3b5c";
const ACCENT: &str = "#9333ea";
const MUTED: &str = "#6b7280";

/// Draw one frame: clear, apply the camera, edges below nodes, then
/// restore so overlay UI stays in screen space.
pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.camera.pan_x, state.camera.pan_y);
	let _ = ctx.scale(state.camera.zoom, state.camera.zoom);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	for edge in &state.model.edges {
		let source = &state.model.nodes[edge.source];
		let target = &state.model.nodes[edge.target];
		let color = relation_color(edge.kind);

		ctx.begin_path();
		ctx.move_to(source.x, source.y);
		ctx.line_to(target.x, target.y);
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(2.0);
		ctx.stroke();

		// Kind label on an opaque patch so it stays legible where edges cross.
		let (mid_x, mid_y) = ((source.x + target.x) / 2.0, (source.y + target.y) / 2.0);
		ctx.set_fill_style_str(SURFACE);
		ctx.fill_rect(mid_x - 30.0, mid_y - 10.0, 60.0, 20.0);
		ctx.set_fill_style_str(color);
		ctx.set_font("10px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(edge.kind.label(), mid_x, mid_y);
	}
}

fn draw_nodes(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	for (idx, node) in state.model.nodes.iter().enumerate() {
		let is_selected = state.interaction.selected == Some(idx);
		let is_hovered = state.interaction.hovered == Some(idx);

		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if is_selected || is_hovered {
			SURFACE_RAISED
		} else {
			SURFACE
		});
		ctx.fill();
		let (stroke, width) = if is_selected {
			(ACCENT, 3.0)
		} else if is_hovered {
			(MUTED, 2.0)
		} else {
			(SURFACE_RAISED, 2.0)
		};
		ctx.set_stroke_style_str(stroke);
		ctx.set_line_width(width);
		ctx.stroke();

		ctx.set_fill_style_str(ACCENT);
		ctx.set_font("bold 14px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&initials(&node.name), node.x, node.y);

		ctx.set_fill_style_str("#ffffff");
		ctx.set_font("12px sans-serif");
		let _ = ctx.fill_text(&node.name, node.x, node.y + NODE_RADIUS + 15.0);
	}
}
