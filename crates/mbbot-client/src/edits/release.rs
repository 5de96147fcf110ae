use super::{log_outcome, set_auto_editor, skipped};
use crate::client::MusicBrainzClient;
use crate::Result;
use mbbot_core::edit::{EntityType, FieldChange, ReleaseDraft, apply_changes};
use mbbot_core::outcome::{markers, require};
use mbbot_core::{EditOutcome, Page};

impl MusicBrainzClient {
    /// Seed the release editor with `draft`, walk it to the end and return
    /// the new release MBID
    pub async fn add_release(&self, draft: &ReleaseDraft, edit_note: &str) -> Result<String> {
        let seed = draft.to_form(edit_note);
        let page = self
            .browser()
            .post(self.url("/release/add")?, &seed)
            .await?;
        tokio::time::sleep(self.config().step_delay).await;

        let form = page.select_post_form("/release")?;
        let page = self
            .browser()
            .submit(&form.submission(Some("step_editnote"))?)
            .await?;
        tokio::time::sleep(self.config().step_delay).await;

        let form = page.select_post_form("/release")?;
        tracing::debug!("Release editor before save:\n{}", page.body());
        let landed = self
            .browser()
            .submit(&form.submission(Some("save"))?)
            .await?;

        let mbid = self.extract_mbid(&landed, EntityType::Release)?;
        tracing::info!("Added release {} as {}", draft.title, mbid);
        Ok(mbid)
    }

    /// Apply guarded changes to the release information step of the
    /// release editor
    pub async fn edit_release_information(
        &self,
        gid: &str,
        changes: &[FieldChange],
        edit_note: &str,
        auto: bool,
    ) -> Result<EditOutcome> {
        let page = self.open_release_editor(gid).await?;
        let mut form = page.select_post_form("/edit")?;

        if let Some(reason) = apply_changes(&mut form, changes, true)? {
            return Ok(skipped(reason));
        }
        form.select("barcode_confirm", &["1"])?;

        let page = self
            .browser()
            .submit(&form.submission(Some("step_editnote"))?)
            .await?;
        self.save_release_edit(&page, edit_note, Some(auto)).await?;

        let outcome = EditOutcome::Applied;
        log_outcome(&format!("release {}", gid), &outcome);
        Ok(outcome)
    }

    pub async fn set_release_script(
        &self,
        gid: &str,
        old_script_id: u32,
        new_script_id: u32,
        edit_note: &str,
        auto: bool,
    ) -> Result<EditOutcome> {
        let changes = [FieldChange::select("script_id", old_script_id, new_script_id)];
        self.edit_release_information(gid, &changes, edit_note, auto)
            .await
    }

    pub async fn set_release_language(
        &self,
        gid: &str,
        old_language_id: u32,
        new_language_id: u32,
        edit_note: &str,
        auto: bool,
    ) -> Result<EditOutcome> {
        let changes = [FieldChange::select(
            "language_id",
            old_language_id,
            new_language_id,
        )];
        self.edit_release_information(gid, &changes, edit_note, auto)
            .await
    }

    /// Change the format of the first medium, through the tracklist step
    ///
    /// This path never sets the auto-editor flag.
    pub async fn set_release_medium_format(
        &self,
        gid: &str,
        old_format_id: u32,
        new_format_id: u32,
        edit_note: &str,
    ) -> Result<EditOutcome> {
        let page = self.open_release_editor(gid).await?;
        let mut form = page.select_post_form("/edit")?;
        form.select("barcode_confirm", &["1"])?;

        let page = self
            .browser()
            .submit(&form.submission(Some("step_tracklist"))?)
            .await?;
        let mut form = page.select_post_form("/edit")?;

        let changes = [FieldChange::select(
            "mediums.0.format_id",
            old_format_id,
            new_format_id,
        )];
        if let Some(reason) = apply_changes(&mut form, &changes, false)? {
            return Ok(skipped(reason));
        }

        let page = self
            .browser()
            .submit(&form.submission(Some("step_editnote"))?)
            .await?;
        self.save_release_edit(&page, edit_note, None).await?;

        let outcome = EditOutcome::Applied;
        log_outcome(&format!("release {} medium format", gid), &outcome);
        Ok(outcome)
    }

    async fn open_release_editor(&self, gid: &str) -> Result<Page> {
        self.browser()
            .open(self.url(&format!("/release/{}/edit", gid))?)
            .await
    }

    /// Fill the edit note step and save; `auto` of `None` leaves the
    /// auto-editor flag untouched
    async fn save_release_edit(&self, page: &Page, edit_note: &str, auto: Option<bool>) -> Result<()> {
        let mut form = page.select_post_form("/edit")?;

        match form.set_text("edit_note", edit_note) {
            Ok(()) => {}
            Err(mbbot_core::Error::ControlNotFound(_)) => {
                tracing::warn!("Release editor did not reach the edit note step");
                return Err(mbbot_core::Error::EditRejected(format!(
                    "no edit note field on {}",
                    page.url()
                ))
                .into());
            }
            Err(e) => return Err(e.into()),
        }
        if let Some(auto) = auto {
            set_auto_editor(&mut form, "as_auto_editor", auto)?;
        }

        let page = self
            .browser()
            .submit(&form.submission(Some("save"))?)
            .await?;
        require(&page, markers::RELEASE_INFORMATION)?;
        Ok(())
    }
}
