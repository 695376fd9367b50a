//! Item selection, ordering, and section rendering.

use crate::schema::{CategoryFilter, MemoryItem};
use crate::section::{SECTION_HEADER, SECTION_NOTICE};
use std::cmp::Ordering;

/// Filter items and order them for rendering.
///
/// Ordering is ascending by first category tag; items without categories
/// sort after every categorized item. The sort is stable, so items with
/// equal keys keep their fetched order.
pub fn select(items: Vec<MemoryItem>, filter: &CategoryFilter) -> Vec<MemoryItem> {
    let mut selected: Vec<MemoryItem> = items
        .into_iter()
        .filter(|item| filter.matches(item))
        .collect();

    selected.sort_by(|a, b| match (a.first_category(), b.first_category()) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    selected
}

/// Render one item as a bullet line.
///
/// Categorized items carry a `[cat1, cat2]` prefix in declaration order.
fn render_line(item: &MemoryItem) -> String {
    if item.categories.is_empty() {
        format!("- {}", item.memory)
    } else {
        format!("- [{}] {}", item.categories.join(", "), item.memory)
    }
}

/// Render the full managed section body for the selected items.
pub fn render_section(items: &[MemoryItem]) -> String {
    let lines: Vec<String> = items.iter().map(render_line).collect();
    format!(
        "{SECTION_HEADER}\n\n{SECTION_NOTICE}\n\n{}",
        lines.join("\n")
    )
}
