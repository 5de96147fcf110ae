use super::with_client;
use crate::{ConnectionArgs, OutputFormat};
use anyhow::{Result, bail};
use mbbot_client::{EditAllowance, EditLimits};

pub fn execute(connection: &ConnectionArgs, limits: EditLimits, format: OutputFormat) -> Result<()> {
    if connection.editor_id.is_none() {
        bail!("edits-left needs the editor id: pass --editor-id or set MB_EDITOR_ID");
    }

    let allowance = with_client(connection, |client| async move {
        client.edits_left(limits).await
    })?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&allowance)?),
        OutputFormat::Pretty => output_pretty(&allowance, limits),
    }
    Ok(())
}

fn output_pretty(allowance: &EditAllowance, limits: EditLimits) {
    use console::style;

    println!("\n{}", style("Edits left today").bold().cyan());
    println!("{}", style("================").cyan());

    let left = if allowance.edits_left == 0 {
        style(allowance.edits_left.to_string()).red().bold()
    } else {
        style(allowance.edits_left.to_string()).green().bold()
    };
    println!(
        "  {:<20} {} (of {} per day)",
        "Total:",
        left,
        limits.max_edits_per_day
    );
    println!(
        "  {:<20} {} (at most {} open)",
        "Open for voting:",
        allowance.normal_edits_left,
        limits.max_open_edits
    );

    if allowance.is_exhausted() {
        println!("\n{}", style("No more edits today").yellow());
    }
}
