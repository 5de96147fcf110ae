use super::{print_outcome, with_client};
use crate::{ConnectionArgs, EditArgs, OutputFormat};
use anyhow::Result;

pub fn set_type(
    connection: &ConnectionArgs,
    gid: &str,
    type_id: u32,
    edit: &EditArgs,
    format: OutputFormat,
) -> Result<()> {
    let outcome = with_client(connection, |client| async move {
        client
            .set_artist_type(gid, type_id, &edit.note, edit.auto)
            .await
    })?;

    print_outcome(&format!("artist {} type", gid), &outcome, format)
}
