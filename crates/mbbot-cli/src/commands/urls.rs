use super::{print_outcome, with_client};
use crate::{ConnectionArgs, EditArgs, OutputFormat};
use anyhow::Result;
use mbbot_core::edit::EntityType;

pub fn add_url(
    connection: &ConnectionArgs,
    entity_type: EntityType,
    entity: &str,
    link_type: u32,
    url: &str,
    edit: &EditArgs,
    format: OutputFormat,
) -> Result<()> {
    tracing::info!("Adding {} to {} {}", url, entity_type, entity);

    let outcome = with_client(connection, |client| async move {
        client
            .add_url(entity_type, entity, link_type, url, &edit.note, edit.auto)
            .await
    })?;

    print_outcome(&format!("{} {} -> {}", entity_type, entity, url), &outcome, format)
}

pub fn edit_url(
    connection: &ConnectionArgs,
    gid: &str,
    old_url: &str,
    new_url: &str,
    edit: &EditArgs,
    format: OutputFormat,
) -> Result<()> {
    let outcome = with_client(connection, |client| async move {
        client
            .edit_url(gid, old_url, new_url, &edit.note, edit.auto)
            .await
    })?;

    print_outcome(&format!("url {}", gid), &outcome, format)
}
