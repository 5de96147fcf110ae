use super::{log_outcome, set_auto_editor, skipped};
use crate::client::MusicBrainzClient;
use crate::Result;
use mbbot_core::edit::EntityType;
use mbbot_core::outcome::{classify, markers};
use mbbot_core::{EditOutcome, SkipReason};

impl MusicBrainzClient {
    /// Attach a URL relationship to an entity
    ///
    /// A relationship that already exists comes back as
    /// [`EditOutcome::Unchanged`].
    pub async fn add_url(
        &self,
        entity_type: EntityType,
        entity_id: &str,
        link_type_id: u32,
        url: &str,
        edit_note: &str,
        auto: bool,
    ) -> Result<EditOutcome> {
        let target = self.url_with_query(
            "/edit/relationship/create_url",
            &[("entity", entity_id), ("type", entity_type.as_str())],
        )?;
        let page = self.browser().open(target).await?;
        let mut form = page.select_post_form("create_url")?;

        form.select("ar.link_type_id", &[link_type_id.to_string()])?;
        form.set_text("ar.url", url)?;
        form.set_text("ar.edit_note", edit_note)?;
        set_auto_editor(&mut form, "ar.as_auto_editor", auto)?;

        let page = self.browser().submit(&form.submission(None)?).await?;
        let outcome = classify(&page, Some(markers::ALREADY_EXISTS))?;
        log_outcome(&format!("{} {} -> {}", entity_type, entity_id, url), &outcome);
        Ok(outcome)
    }

    /// Replace the address of a URL entity, provided it still reads `old_url`
    pub async fn edit_url(
        &self,
        url_gid: &str,
        old_url: &str,
        new_url: &str,
        edit_note: &str,
        auto: bool,
    ) -> Result<EditOutcome> {
        let page = self
            .browser()
            .open(self.url(&format!("/url/{}/edit", url_gid))?)
            .await?;
        let mut form = page.select_post_form("/edit")?;

        let current = form.text("edit-url.url")?.to_string();
        if current != old_url {
            return Ok(skipped(SkipReason::value_changed("edit-url.url")));
        }
        if current == new_url {
            return Ok(skipped(SkipReason::already_set("edit-url.url")));
        }

        form.set_text("edit-url.url", new_url)?;
        form.set_text("edit-url.edit_note", edit_note)?;
        set_auto_editor(&mut form, "edit-url.as_auto_editor", auto)?;

        let page = self.browser().submit(&form.submission(None)?).await?;
        let outcome = classify(&page, Some(markers::NO_CHANGES))?;
        log_outcome(&format!("url {}", url_gid), &outcome);
        Ok(outcome)
    }
}
