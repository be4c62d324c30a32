//! Tag suggestions for the search field.

use crate::tags::{Tag, TagCatalog};

/// Returns catalog tags whose label contains `text`, ignoring case.
///
/// Results are sorted by tag id. An empty `text` matches every tag. Tags
/// already in `selected` are left out.
pub fn suggest_tags<'a>(catalog: &'a TagCatalog, text: &str, selected: &[Tag]) -> Vec<&'a Tag> {
    let needle = text.to_lowercase();
    catalog
        .tags_sorted()
        .into_iter()
        .filter(|tag| tag.label.to_lowercase().contains(&needle))
        .filter(|tag| !selected.contains(*tag))
        .collect()
}
