use std::cell::RefCell;
use std::rc::Rc;

use leptos::either::Either;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, MouseEvent, WheelEvent,
};

use super::palette::relation_color;
use super::render;
use super::state::{GraphState, SelectionInfo};
use super::types::{GraphData, RelationKind, initials};

/// Interactive relationship diagram on a 2D canvas.
///
/// Renders the characters and relationships from `data` as a force-laid-out
/// graph with pan/zoom, click-to-select, hover highlighting, a legend, an
/// info panel for the selected character, and PNG export.
#[component]
pub fn RelationshipGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = 800.0)] width: f64,
	#[prop(default = 500.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<GraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	// Screen-space overlays are DOM, not canvas; these mirror the pieces
	// of state they need.
	let zoom_pct = RwSignal::new(100_u32);
	let selection = RwSignal::new(None::<SelectionInfo>);
	let layout_active = RwSignal::new(false);
	let hovering = RwSignal::new(false);
	let panning = RwSignal::new(false);

	let sync_overlay = move |s: &GraphState| {
		zoom_pct.set(s.zoom_percent());
		layout_active.set(s.layout.is_active());
		hovering.set(s.interaction.hovered.is_some());
		panning.set(s.interaction.is_panning());
		let info = s.selection_info();
		if selection.with_untracked(|current| *current != info) {
			selection.set(info);
		}
	};

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		if state_init.borrow().is_none() {
			*state_init.borrow_mut() =
				Some(GraphState::new(&data.get_untracked(), width, height));
		}
		if animate_init.borrow().is_some() {
			return;
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// The loop retires itself once the canvas leaves the document,
			// so no scheduled tick outlives the component.
			if !canvas.is_connected() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.frame() && !s.layout.is_active() {
					layout_active.set(false);
				}
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_data = state.clone();
	Effect::new(move |_| {
		let data = data.get();
		if let Some(ref mut s) = *state_data.borrow_mut() {
			s.set_data(&data);
			sync_overlay(s);
		}
	});

	let canvas_pos = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_pos(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
			sync_overlay(s);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_pos(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
			sync_overlay(s);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up();
			sync_overlay(s);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
			sync_overlay(s);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.wheel(ev.delta_y());
			sync_overlay(s);
		}
	};

	let state_zi = state.clone();
	let on_zoom_in = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_zi.borrow_mut() {
			s.zoom_in();
			sync_overlay(s);
		}
	};

	let state_zo = state.clone();
	let on_zoom_out = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_zo.borrow_mut() {
			s.zoom_out();
			sync_overlay(s);
		}
	};

	let state_rv = state.clone();
	let on_reset = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_rv.borrow_mut() {
			s.reset_view();
			sync_overlay(s);
		}
	};

	let state_rl = state.clone();
	let on_relayout = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_rl.borrow_mut() {
			s.relayout();
			sync_overlay(s);
		}
	};

	let on_export = move |_: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		export_png(&canvas.into());
	};

	view! {
		<div
			class="relationship-graph"
			style:width=format!("{width}px")
			style:height=format!("{height}px")
		>
			{move || {
				data.get()
					.characters
					.is_empty()
					.then(|| {
						view! {
							<div class="graph-empty-state">
								<p>"No characters to visualize"</p>
								<p class="graph-empty-hint">
									"Add characters with relationships to see the diagram"
								</p>
							</div>
						}
					})
			}}

			<div
				class="graph-viewport"
				style:display=move || {
					if data.get().characters.is_empty() { "none" } else { "block" }
				}
			>
				<div class="graph-toolbar">
					<button title="Zoom in" on:click=on_zoom_in>
						"+"
					</button>
					<span class="graph-zoom-readout">
						{move || format!("{}%", zoom_pct.get())}
					</span>
					<button title="Zoom out" on:click=on_zoom_out>
						"-"
					</button>
					<button title="Reset view" on:click=on_reset>
						"Reset"
					</button>
					<button
						title="Re-layout"
						disabled=move || layout_active.get()
						on:click=on_relayout
					>
						{move || if layout_active.get() { "Laying out" } else { "Re-layout" }}
					</button>
					<button title="Export as image" on:click=on_export>
						"Export"
					</button>
				</div>

				<div class="graph-legend">
					<p class="graph-legend-title">"Relationship Types"</p>
					<div class="graph-legend-grid">
						{RelationKind::ALL
							.iter()
							.map(|&kind| {
								view! {
									<div class="graph-legend-entry">
										<span
											class="graph-legend-swatch"
											style:background-color=relation_color(kind)
										></span>
										<span class="graph-legend-label">{kind.label()}</span>
									</div>
								}
							})
							.collect_view()}
					</div>
				</div>

				<canvas
					node_ref=canvas_ref
					class="relationship-graph-canvas"
					style:display="block"
					style:cursor=move || {
						if panning.get() {
							"grabbing"
						} else if hovering.get() {
							"pointer"
						} else {
							"grab"
						}
					}
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=on_mouseup
					on:mouseleave=on_mouseleave
					on:wheel=on_wheel
				/>

				{move || {
					selection
						.get()
						.map(|info| {
							let portrait = match info.image_url.clone() {
								Some(url) => {
									Either::Left(
										view! {
											<img
												class="graph-info-portrait"
												src=url
												alt=info.name.clone()
												width="40"
												height="40"
											/>
										},
									)
								}
								None => {
									Either::Right(
										view! {
											<div class="graph-info-initials">
												{initials(&info.name)}
											</div>
										},
									)
								}
							};
							view! {
								<div class="graph-info-panel">
									<div class="graph-info-header">
										{portrait}
										<p class="graph-info-name">{info.name.clone()}</p>
									</div>
									{(!info.relations.is_empty())
										.then(|| {
											view! {
												<p class="graph-info-caption">"Relationships:"</p>
											}
										})}
									<ul class="graph-info-relations">
										{info.relations
											.iter()
											.map(|(kind, other)| {
												let color = relation_color(*kind);
												view! {
													<li>
														<span style:color=color>{kind.label()}</span>
														<span class="graph-info-with">" with "</span>
														<span class="graph-info-other">
															{other.clone()}
														</span>
													</li>
												}
											})
											.collect_view()}
									</ul>
								</div>
							}
						})
				}}
			</div>
		</div>
	}
}

/// Serialize the current frame and trigger a download, keeping parity
/// with exactly what is on screen.
fn export_png(canvas: &HtmlCanvasElement) {
	let url = match canvas.to_data_url() {
		Ok(url) => url,
		Err(err) => {
			log::warn!("image export failed: {err:?}");
			return;
		}
	};
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let anchor: HtmlAnchorElement = document.create_element("a").unwrap().dyn_into().unwrap();
	anchor.set_download("relationship-diagram.png");
	anchor.set_href(&url);
	anchor.click();
}
