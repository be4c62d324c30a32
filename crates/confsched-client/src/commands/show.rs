//! The `show` command: everything known about one event.

use confsched_core::ConferenceEvent;

use super::{Context, render_json};
use crate::error::{ClientError, ClientResult};

/// Loads the schedule and prints the event with `id`.
pub async fn run(ctx: &Context, id: &str) -> ClientResult<()> {
    let store = ctx.load_store().await?;
    let event = store
        .event(id)
        .await
        .ok_or_else(|| unknown_event(id))?;
    println!("{}", render(ctx, &event)?);
    Ok(())
}

/// Renders the detail view of `event`.
pub fn render(ctx: &Context, event: &ConferenceEvent) -> ClientResult<String> {
    if ctx.is_json() {
        render_json(&ctx.formatter.format_event_detail_json(event))
    } else {
        Ok(ctx.formatter.format_event_detail(event))
    }
}

fn unknown_event(id: &str) -> ClientError {
    ClientError::InvalidArgument(format!("unknown event id {}", id))
}
