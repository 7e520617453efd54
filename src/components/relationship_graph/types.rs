/// One campaign character, supplied read-only by the surrounding app.
#[derive(Clone, Debug, PartialEq)]
pub struct Character {
	pub id: String,
	pub name: String,
	pub image_url: Option<String>,
}

/// A directed relationship between two characters, by character id.
#[derive(Clone, Debug, PartialEq)]
pub struct Relationship {
	pub character_id: String,
	pub related_character_id: String,
	pub kind: RelationKind,
}

/// The fixed vocabulary of relationship kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationKind {
	Family,
	Romantic,
	Friend,
	Ally,
	Rival,
	Enemy,
	Acquaintance,
	Mentor,
	Student,
	Business,
}

impl RelationKind {
	/// Every kind, in legend order.
	pub const ALL: [RelationKind; 10] = [
		RelationKind::Family,
		RelationKind::Romantic,
		RelationKind::Friend,
		RelationKind::Ally,
		RelationKind::Rival,
		RelationKind::Enemy,
		RelationKind::Acquaintance,
		RelationKind::Mentor,
		RelationKind::Student,
		RelationKind::Business,
	];

	/// Display label, also drawn on edge midpoints.
	pub fn label(self) -> &'static str {
		match self {
			RelationKind::Family => "family",
			RelationKind::Romantic => "romantic",
			RelationKind::Friend => "friend",
			RelationKind::Ally => "ally",
			RelationKind::Rival => "rival",
			RelationKind::Enemy => "enemy",
			RelationKind::Acquaintance => "acquaintance",
			RelationKind::Mentor => "mentor",
			RelationKind::Student => "student",
			RelationKind::Business => "business",
		}
	}
}

/// Characters plus relationships, the component's input payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub characters: Vec<Character>,
	pub relationships: Vec<Relationship>,
}

/// Up to two uppercase initials for a character name, `?` when empty.
pub fn initials(name: &str) -> String {
	let s: String = name
		.split_whitespace()
		.filter_map(|word| word.chars().next())
		.flat_map(|c| c.to_uppercase())
		.take(2)
		.collect();
	if s.is_empty() { "?".into() } else { s }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn initials_takes_first_letter_of_each_word() {
		assert_eq!(initials("Alice Smith"), "AS");
		assert_eq!(initials("bob"), "B");
	}

	#[test]
	fn initials_caps_at_two_letters() {
		assert_eq!(initials("Ser Jorah of Mormont"), "SJ");
	}

	#[test]
	fn initials_falls_back_for_empty_names() {
		assert_eq!(initials(""), "?");
		assert_eq!(initials("   "), "?");
	}

	#[test]
	fn all_kinds_are_listed_once() {
		assert_eq!(RelationKind::ALL.len(), 10);
		for (i, a) in RelationKind::ALL.iter().enumerate() {
			for b in &RelationKind::ALL[i + 1..] {
				assert_ne!(a, b);
			}
		}
	}
}
