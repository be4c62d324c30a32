//! The `schedule` command.

use confsched_core::ScheduleDay;

use super::{Context, render_json};
use crate::error::{ClientError, ClientResult};

/// Loads the schedule and prints it, optionally limited to one day.
pub async fn run(ctx: &Context, day: Option<usize>) -> ClientResult<()> {
    let store = ctx.load_store().await?;
    let days = store.days().await;
    println!("{}", render(ctx, &days, day)?);
    Ok(())
}

/// Renders `days`, or only the `day`-th one (1-based).
pub fn render(ctx: &Context, days: &[ScheduleDay], day: Option<usize>) -> ClientResult<String> {
    let selected = match day {
        Some(n) => select_day(days, n)?,
        None => days,
    };

    if ctx.is_json() {
        render_json(&ctx.formatter.format_schedule_json(selected))
    } else {
        Ok(ctx.formatter.format_schedule(selected))
    }
}

fn select_day(days: &[ScheduleDay], n: usize) -> ClientResult<&[ScheduleDay]> {
    if n == 0 || n > days.len() {
        return Err(ClientError::InvalidArgument(format!(
            "day {} is out of range, the schedule has {} day(s)",
            n,
            days.len()
        )));
    }
    Ok(&days[n - 1..n])
}
