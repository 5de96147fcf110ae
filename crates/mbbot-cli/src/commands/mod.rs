pub mod allowance;
pub mod artist;
pub mod completion;
pub mod merge;
pub mod notes;
pub mod relationship;
pub mod release;
pub mod urls;

use crate::{ConnectionArgs, OutputFormat};
use anyhow::Result;
use mbbot_client::{EditOutcome, MusicBrainzClient};
use std::future::Future;

/// Log in and run `task` on a fresh runtime
pub(crate) fn with_client<F, Fut, T>(connection: &ConnectionArgs, task: F) -> Result<T>
where
    F: FnOnce(MusicBrainzClient) -> Fut,
    Fut: Future<Output = mbbot_client::Result<T>>,
{
    let config = connection.to_config()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        tracing::debug!("Logging in as {} on {}", config.username, config.server);
        let client = MusicBrainzClient::connect(config).await?;
        Ok(task(client).await?)
    })
}

/// Report the outcome of a single edit
pub(crate) fn print_outcome(what: &str, outcome: &EditOutcome, format: OutputFormat) -> Result<()> {
    use console::style;

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({ "edit": what, "result": outcome });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Pretty => match outcome {
            EditOutcome::Applied => {
                println!("{} {}: edit entered", style("[OK]").green().bold(), what)
            }
            EditOutcome::Unchanged => {
                println!("{} {}: nothing to change", style("[--]").dim(), what)
            }
            EditOutcome::Skipped(reason) => {
                println!("{} {}: {}", style("[SKIP]").yellow(), what, reason)
            }
        },
    }
    Ok(())
}

/// Report a procedure that either succeeds or fails as a whole
pub(crate) fn print_done(what: &str, format: OutputFormat) -> Result<()> {
    print_outcome(what, &EditOutcome::Applied, format)
}
