use super::{log_outcome, set_auto_editor, skipped};
use crate::client::MusicBrainzClient;
use crate::Result;
use mbbot_core::edit::{EntityType, RelationshipEdit};
use mbbot_core::outcome::{classify, markers, require};
use mbbot_core::{EditOutcome, SkipReason};

impl MusicBrainzClient {
    /// Change the link type, attributes and dates of a relationship
    ///
    /// The edit is only entered while the relationship still has
    /// `old_link_type_id`.
    pub async fn edit_relationship(
        &self,
        edit: &RelationshipEdit,
        edit_note: &str,
        auto: bool,
    ) -> Result<EditOutcome> {
        let id = edit.id.to_string();
        let target = self.url_with_query(
            "/edit/relationship/edit",
            &[
                ("id", id.as_str()),
                ("type0", edit.entity0_type.as_str()),
                ("type1", edit.entity1_type.as_str()),
            ],
        )?;
        let page = self.browser().open(target).await?;
        let mut form = page.select_post_form("/edit")?;

        let old_type = edit.old_link_type_id.to_string();
        let new_type = edit.new_link_type_id.to_string();
        let current = form.selected("ar.link_type_id")?;

        if current == [new_type.clone()] && edit.new_link_type_id != edit.old_link_type_id {
            return Ok(skipped(SkipReason::already_set("ar.link_type_id")));
        }
        if current != [old_type] {
            return Ok(skipped(SkipReason::value_changed("ar.link_type_id")));
        }

        form.select("ar.link_type_id", &[new_type])?;
        for (name, value) in &edit.attributes {
            form.set_value(&format!("ar.attrs.{}", name), value.clone())?;
        }
        let dates = edit
            .begin_date
            .form_fields("ar.begin_date")
            .into_iter()
            .chain(edit.end_date.form_fields("ar.end_date"));
        for (name, value) in dates {
            form.set_text(&name, value)?;
        }
        form.set_text("ar.edit_note", edit_note)?;
        set_auto_editor(&mut form, "ar.as_auto_editor", auto)?;

        let page = self.browser().submit(&form.submission(None)?).await?;
        let outcome = classify(&page, Some(markers::RELATIONSHIP_EXISTS))?;
        log_outcome(&format!("relationship {}", edit.id), &outcome);
        Ok(outcome)
    }

    /// Remove a relationship; the removal must be accepted
    pub async fn remove_relationship(
        &self,
        rel_id: u64,
        entity0_type: EntityType,
        entity1_type: EntityType,
        edit_note: &str,
    ) -> Result<()> {
        let id = rel_id.to_string();
        let target = self.url_with_query(
            "/edit/relationship/delete",
            &[
                ("id", id.as_str()),
                ("type0", entity0_type.as_str()),
                ("type1", entity1_type.as_str()),
            ],
        )?;
        let page = self.browser().open(target).await?;
        let mut form = page.select_post_form("/edit")?;
        form.set_text("confirm.edit_note", edit_note)?;

        let page = self.browser().submit(&form.submission(None)?).await?;
        require(&page, markers::EDIT_ACCEPTED)?;

        tracing::info!("Removed relationship {}", rel_id);
        Ok(())
    }
}
