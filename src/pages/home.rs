use leptos::prelude::*;

use crate::components::relationship_graph::{
	Character, GraphData, RelationKind, Relationship, RelationshipGraphCanvas,
};

/// Built-in sample campaign so the app runs standalone.
fn sample_campaign() -> GraphData {
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
			character("aria", "Aria Blackwood"),
			character("tobin", "Tobin Hale"),
			character("mags", "Magistrate Corin"),
			character("sella", "Sella of the Reeds"),
			character("dren", "Dren Vos"),
			character("ilse", "Ilse Varn"),
			character("orrin", "Orrin Stott"),
		],
		relationships: vec![
			relationship("aria", "tobin", RelationKind::Ally),
			relationship("aria", "sella", RelationKind::Family),
			relationship("tobin", "mags", RelationKind::Rival),
			relationship("mags", "dren", RelationKind::Business),
			relationship("dren", "aria", RelationKind::Enemy),
			relationship("sella", "ilse", RelationKind::Mentor),
			relationship("ilse", "tobin", RelationKind::Friend),
			relationship("orrin", "sella", RelationKind::Romantic),
			relationship("orrin", "mags", RelationKind::Acquaintance),
			relationship("ilse", "dren", RelationKind::Student),
		],
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(sample_campaign);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="diagram-page">
				<h1>"Character Relationships"</h1>
				<p class="subtitle">
					"Click a character to inspect them. Drag the background to pan, scroll to zoom."
				</p>
				<RelationshipGraphCanvas data=graph_data />
			</main>
		</ErrorBoundary>
	}
}
