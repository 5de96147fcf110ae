use super::{print_done, with_client};
use crate::{ConnectionArgs, OutputFormat};
use anyhow::Result;
use mbbot_core::edit::EntityType;

pub fn remove(
    connection: &ConnectionArgs,
    rel_id: u64,
    entity0_type: EntityType,
    entity1_type: EntityType,
    note: &str,
    format: OutputFormat,
) -> Result<()> {
    with_client(connection, |client| async move {
        client
            .remove_relationship(rel_id, entity0_type, entity1_type, note)
            .await
    })?;

    print_done(
        &format!("{}-{} relationship {} removed", entity0_type, entity1_type, rel_id),
        format,
    )
}
