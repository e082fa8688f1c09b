//! List command - Prints guestbook entries.

use std::io::Write;

use common::AppResult;
use domain::sort_newest_first;

use super::output_error;
use crate::cli::args::ListArgs;
use crate::clients::GuestbookApi;

/// Execute the list command
pub async fn execute(args: ListArgs, api: &dyn GuestbookApi, out: &mut impl Write) -> AppResult<()> {
    let mut entries = api.list_entries().await.into_result()?;
    sort_newest_first(&mut entries);

    if args.json {
        let json = serde_json::to_string_pretty(&entries)?;
        writeln!(out, "{}", json).map_err(output_error)?;
    } else if entries.is_empty() {
        writeln!(out, "No entries yet").map_err(output_error)?;
    } else {
        for entry in &entries {
            writeln!(
                out,
                "{}  @{}  {}",
                entry.created_at.format("%Y-%m-%d %H:%M"),
                entry.twitter_handle,
                entry.story
            )
            .map_err(output_error)?;
        }
    }

    tracing::info!("Listed {} entries", entries.len());
    Ok(())
}
