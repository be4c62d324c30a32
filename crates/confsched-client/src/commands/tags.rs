//! The `tags` and `suggest` commands.

use confsched_core::{Tag, suggest_tags};
use serde::Serialize;

use super::{Context, render_json};
use crate::error::ClientResult;

/// A tag in JSON output.
#[derive(Debug, Serialize)]
struct JsonTag<'a> {
    id: u32,
    label: &'a str,
    category: &'static str,
    background_color: &'a str,
    foreground_color: &'a str,
    icon: &'a str,
}

impl<'a> From<&'a Tag> for JsonTag<'a> {
    fn from(tag: &'a Tag) -> Self {
        Self {
            id: tag.id,
            label: &tag.label,
            category: tag.category.display_name(),
            background_color: &tag.background_color,
            foreground_color: &tag.foreground_color,
            icon: tag.icon(),
        }
    }
}

/// Prints every catalog tag, sorted by id.
pub fn list(ctx: &Context) -> ClientResult<()> {
    println!("{}", render(ctx, &ctx.catalog.tags_sorted())?);
    Ok(())
}

/// Prints tags whose label contains `text`, minus the `selected` ones.
pub fn suggest(ctx: &Context, text: Option<String>, selected: &[u32]) -> ClientResult<()> {
    println!("{}", render_suggestions(ctx, text.as_deref(), selected)?);
    Ok(())
}

/// Renders the suggestions for `text`.
pub fn render_suggestions(ctx: &Context, text: Option<&str>, selected: &[u32]) -> ClientResult<String> {
    let selected = ctx.resolve_tags(selected)?;
    let tags = suggest_tags(&ctx.catalog, text.unwrap_or_default(), &selected);
    render(ctx, &tags)
}

/// Renders a tag list.
pub fn render(ctx: &Context, tags: &[&Tag]) -> ClientResult<String> {
    if ctx.is_json() {
        let json: Vec<JsonTag<'_>> = tags.iter().map(|t| JsonTag::from(*t)).collect();
        render_json(&json)
    } else {
        Ok(ctx.formatter.format_tags(tags))
    }
}
