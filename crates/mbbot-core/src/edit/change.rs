use crate::Result;
use crate::form::{FieldValue, HtmlForm};
use crate::outcome::SkipReason;
use serde::{Deserialize, Serialize};

/// A guarded change of one form field: only applied while the field still
/// holds `old`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub name: String,
    pub old: FieldValue,
    pub new: FieldValue,
}

impl FieldChange {
    pub fn new(name: impl Into<String>, old: FieldValue, new: FieldValue) -> Self {
        Self {
            name: name.into(),
            old,
            new,
        }
    }

    /// A select change from one option id to another
    pub fn select(name: impl Into<String>, old_id: u32, new_id: u32) -> Self {
        Self::new(
            name,
            FieldValue::single(old_id.to_string()),
            FieldValue::single(new_id.to_string()),
        )
    }
}

/// Apply guarded changes to a form, in order
///
/// Returns the reason to abandon the edit, or `None` when at least one
/// field was changed. A field that no longer holds its `old` value aborts
/// the whole edit; when every field already holds its `new` value there is
/// nothing to submit. With `unlock` set, read-only controls are made
/// writable first.
pub fn apply_changes(
    form: &mut HtmlForm,
    changes: &[FieldChange],
    unlock: bool,
) -> Result<Option<SkipReason>> {
    let mut changed = false;

    for change in changes {
        if unlock {
            form.set_readonly(&change.name, false)?;
        }

        let current = form.value(&change.name)?;
        if current != change.old {
            tracing::info!(
                "{} has changed (expected {}, found {}), aborting",
                change.name,
                change.old,
                current
            );
            return Ok(Some(SkipReason::value_changed(&change.name)));
        }

        if current != change.new {
            form.set_value(&change.name, change.new.clone())?;
            changed = true;
        }
    }

    if !changed {
        let fields: Vec<&str> = changes.iter().map(|c| c.name.as_str()).collect();
        tracing::info!("{} already set, not changing", fields.join(", "));
        return Ok(Some(SkipReason::already_set(fields.join(", "))));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn release_form() -> HtmlForm {
        let html = r#"<form method="post" action="/release/abc/edit">
            <select name="script_id" readonly>
                <option value="">[none]</option>
                <option value="28" selected>Latin</option>
                <option value="85">Japanese</option>
            </select>
            <select name="language_id">
                <option value="120" selected>English</option>
                <option value="198">Japanese</option>
            </select>
        </form>"#;
        let url = Url::parse("https://musicbrainz.org/release/abc/edit").unwrap();
        HtmlForm::parse_all(html, &url).remove(0)
    }

    #[test]
    fn test_applies_change_after_unlocking() {
        let mut form = release_form();
        let changes = [FieldChange::select("script_id", 28, 85)];

        let skip = apply_changes(&mut form, &changes, true).unwrap();
        assert_eq!(skip, None);
        assert_eq!(form.selected("script_id").unwrap(), vec!["85"]);
    }

    #[test]
    fn test_locked_control_without_unlock_fails() {
        let mut form = release_form();
        let changes = [FieldChange::select("script_id", 28, 85)];
        assert!(apply_changes(&mut form, &changes, false).is_err());
    }

    #[test]
    fn test_changed_value_aborts() {
        let mut form = release_form();
        let changes = [
            FieldChange::select("language_id", 120, 198),
            FieldChange::select("script_id", 85, 28),
        ];

        let skip = apply_changes(&mut form, &changes, true).unwrap();
        assert_eq!(skip, Some(SkipReason::value_changed("script_id")));
    }

    #[test]
    fn test_already_set_skips() {
        let mut form = release_form();
        let changes = [FieldChange::select("language_id", 120, 120)];

        let skip = apply_changes(&mut form, &changes, false).unwrap();
        assert_eq!(skip, Some(SkipReason::already_set("language_id")));
    }
}
