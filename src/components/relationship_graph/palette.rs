use super::types::RelationKind;

/// Fixed relation-kind color table.
///
/// Single source of truth for edge strokes, edge labels, the legend, and
/// the info panel, so the surfaces cannot drift apart.
pub const fn relation_color(kind: RelationKind) -> &'static str {
	match kind {
		RelationKind::Family => "#ec4899",
		RelationKind::Romantic => "#f43f5e",
		RelationKind::Friend => "#22c55e",
		RelationKind::Ally => "#3b82f6",
		RelationKind::Rival => "#f97316",
		RelationKind::Enemy => "#ef4444",
		RelationKind::Acquaintance => "#6b7280",
		RelationKind::Mentor => "#8b5cf6",
		RelationKind::Student => "#a855f7",
		RelationKind::Business => "#eab308",
	}
}
