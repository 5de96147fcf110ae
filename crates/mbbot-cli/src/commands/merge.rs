use super::{print_done, with_client};
use crate::{ConnectionArgs, OutputFormat};
use anyhow::{Result, bail};
use mbbot_core::edit::EntityType;

pub fn execute(
    connection: &ConnectionArgs,
    entity_type: EntityType,
    target: u64,
    ids: &[u64],
    note: &str,
    format: OutputFormat,
) -> Result<()> {
    let mut entity_ids = ids.to_vec();
    if !entity_ids.contains(&target) {
        entity_ids.insert(0, target);
    }
    if entity_ids.len() < 2 {
        bail!("Nothing to merge: give at least one {} besides the target", entity_type);
    }

    let merging = entity_ids.as_slice();
    with_client(connection, |client| async move {
        client.merge(entity_type, merging, target, note).await
    })?;

    print_done(
        &format!("{} {}(s) merged into {}", merging.len(), entity_type, target),
        format,
    )
}
