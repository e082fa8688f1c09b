//! Create command - Signs the guestbook.

use std::io::Write;

use common::AppResult;
use domain::NewEntry;

use super::output_error;
use crate::cli::args::CreateArgs;
use crate::clients::GuestbookApi;

/// Execute the create command
pub async fn execute(
    args: CreateArgs,
    api: &dyn GuestbookApi,
    out: &mut impl Write,
) -> AppResult<()> {
    let entry = NewEntry::new(args.twitter_handle, args.story);
    entry.check()?;

    if args.raw {
        let body = api.create_entry_raw(entry).await?;
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?).map_err(output_error)?;
        return Ok(());
    }

    let created = api.create_entry(entry).await?;
    writeln!(out, "Created entry {}", created.id).map_err(output_error)?;
    tracing::info!("Created entry {} for @{}", created.id, created.twitter_handle);

    Ok(())
}
