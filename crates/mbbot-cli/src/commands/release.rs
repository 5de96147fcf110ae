use super::{print_outcome, with_client};
use crate::{ConnectionArgs, EditArgs, OutputFormat};
use anyhow::Result;

/// Release information field a command changes
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReleaseField {
    Script,
    Language,
}

pub fn set_information(
    connection: &ConnectionArgs,
    gid: &str,
    field: ReleaseField,
    old_id: u32,
    new_id: u32,
    edit: &EditArgs,
    format: OutputFormat,
) -> Result<()> {
    let outcome = with_client(connection, |client| async move {
        match field {
            ReleaseField::Script => {
                client
                    .set_release_script(gid, old_id, new_id, &edit.note, edit.auto)
                    .await
            }
            ReleaseField::Language => {
                client
                    .set_release_language(gid, old_id, new_id, &edit.note, edit.auto)
                    .await
            }
        }
    })?;

    let what = match field {
        ReleaseField::Script => "script",
        ReleaseField::Language => "language",
    };
    print_outcome(&format!("release {} {}", gid, what), &outcome, format)
}

pub fn set_medium_format(
    connection: &ConnectionArgs,
    gid: &str,
    old_id: u32,
    new_id: u32,
    note: &str,
    format: OutputFormat,
) -> Result<()> {
    let outcome = with_client(connection, |client| async move {
        client
            .set_release_medium_format(gid, old_id, new_id, note)
            .await
    })?;

    print_outcome(&format!("release {} medium format", gid), &outcome, format)
}
