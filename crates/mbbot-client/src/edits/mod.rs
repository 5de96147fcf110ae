//! Edit procedures, one `impl MusicBrainzClient` block per entity family.

mod allowance;
mod artist;
mod merge;
mod notes;
mod relationship;
mod release;
mod urls;

use crate::Result;
use mbbot_core::form::HtmlForm;
use mbbot_core::{EditOutcome, SkipReason};

/// Tick or clear the auto-editor checkbox; editors without auto-editor
/// privileges don't get the control at all
pub(crate) fn set_auto_editor(form: &mut HtmlForm, name: &str, auto: bool) -> Result<()> {
    let values: &[&str] = if auto { &["1"] } else { &[] };
    match form.select(name, values) {
        Ok(()) => Ok(()),
        Err(mbbot_core::Error::ControlNotFound(_)) => {
            tracing::debug!("No {} control, submitting as a normal edit", name);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn skipped(reason: SkipReason) -> EditOutcome {
    tracing::info!(" * {}", reason);
    EditOutcome::Skipped(reason)
}

pub(crate) fn log_outcome(what: &str, outcome: &EditOutcome) {
    match outcome {
        EditOutcome::Applied => tracing::info!("{}: edit entered", what),
        EditOutcome::Unchanged => tracing::info!("{}: nothing to change", what),
        EditOutcome::Skipped(reason) => tracing::info!("{}: skipped, {}", what, reason),
    }
}
