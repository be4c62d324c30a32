//! The `search` command.

use confsched_core::{SearchQuery, SearchSection};
use tracing::debug;

use super::{Context, render_json};
use crate::error::ClientResult;

/// Loads the schedule, runs the query and prints the matching days.
pub async fn run(ctx: &Context, text: Option<String>, tag_ids: &[u32]) -> ClientResult<()> {
    let query = build_query(ctx, text, tag_ids)?;
    let store = ctx.load_store().await?;
    let sections = store.search(&query).await;
    println!("{}", render(ctx, &sections)?);
    Ok(())
}

/// Builds the query, resolving tag ids through the catalog.
pub fn build_query(ctx: &Context, text: Option<String>, tag_ids: &[u32]) -> ClientResult<SearchQuery> {
    let query = SearchQuery::new(text.unwrap_or_default()).with_tags(ctx.resolve_tags(tag_ids)?);
    if !query.is_active() {
        debug!("empty query, listing every scheduled event");
    }
    Ok(query)
}

/// Renders search results.
pub fn render(ctx: &Context, sections: &[SearchSection]) -> ClientResult<String> {
    if ctx.is_json() {
        render_json(&ctx.formatter.format_search_json(sections))
    } else {
        Ok(ctx.formatter.format_search(sections))
    }
}
