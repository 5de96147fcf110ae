use super::{print_done, with_client};
use crate::{ConnectionArgs, OutputFormat};
use anyhow::Result;

pub fn cancel_edit(
    connection: &ConnectionArgs,
    edit_id: u64,
    note: &str,
    format: OutputFormat,
) -> Result<()> {
    with_client(connection, |client| async move {
        client.cancel_edit(edit_id, note).await
    })?;

    print_done(&format!("edit #{} cancelled", edit_id), format)
}
