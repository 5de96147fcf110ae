use super::{log_outcome, set_auto_editor, skipped};
use crate::client::MusicBrainzClient;
use crate::Result;
use mbbot_core::edit::{ArtistEdit, EntityType, NewArtist};
use mbbot_core::outcome::{classify, markers};
use mbbot_core::{EditOutcome, SkipReason};

impl MusicBrainzClient {
    /// Create an artist and return its MBID
    ///
    /// Without an explicit sort name one is guessed from the artist name.
    pub async fn add_artist(&self, artist: &NewArtist, edit_note: &str) -> Result<String> {
        let sort_name = match &artist.sort_name {
            Some(sort_name) => sort_name.clone(),
            None => self.guess_sort_name(&artist.name)?,
        };

        let page = self.browser().open(self.url("/artist/create")?).await?;
        let mut form = page.select_post_form("/artist/create")?;
        form.set_text("edit-artist.name", artist.name.as_str())?;
        form.set_text("edit-artist.sort_name", sort_name)?;
        form.set_text("edit-artist.edit_note", edit_note)?;

        let landed = self.browser().submit(&form.submission(None)?).await?;
        let mbid = self.extract_mbid(&landed, EntityType::Artist)?;

        tracing::info!("Created artist {} as {}", artist.name, mbid);
        Ok(mbid)
    }

    /// Fill in empty artist fields
    ///
    /// Fields are checked in order country, type, gender, begin date, end
    /// date, comment; the first requested field that already holds data
    /// abandons the whole edit.
    pub async fn edit_artist(
        &self,
        gid: &str,
        edit: &ArtistEdit,
        edit_note: &str,
        auto: bool,
    ) -> Result<EditOutcome> {
        let page = self
            .browser()
            .open(self.url(&format!("/artist/{}/edit", gid))?)
            .await?;
        let mut form = page.select_post_form("/edit")?;

        let selects = [
            ("country", "edit-artist.country_id", edit.country_id),
            ("type", "edit-artist.type_id", edit.type_id),
            ("gender", "edit-artist.gender_id", edit.gender_id),
        ];
        for (label, field, wanted) in selects {
            if let Some(id) = wanted {
                if !form.value(field)?.is_blank() {
                    return Ok(skipped(SkipReason::already_set(label)));
                }
                form.select(field, &[id.to_string()])?;
            }
        }

        let dates = [
            ("begin date", "edit-artist.begin_date", &edit.begin_date),
            ("end date", "edit-artist.end_date", &edit.end_date),
        ];
        for (label, prefix, wanted) in dates {
            if let Some(date) = wanted {
                if !form.value(&format!("{}.year", prefix))?.is_blank() {
                    return Ok(skipped(SkipReason::already_set(label)));
                }
                for (name, value) in date.form_fields(prefix) {
                    form.set_text(&name, value)?;
                }
            }
        }

        if let Some(comment) = &edit.comment {
            if !form.value("edit-artist.comment")?.is_blank() {
                return Ok(skipped(SkipReason::already_set("comment")));
            }
            form.set_text("edit-artist.comment", comment.as_str())?;
        }

        form.set_text("edit-artist.edit_note", edit_note)?;
        set_auto_editor(&mut form, "edit-artist.as_auto_editor", auto)?;

        let page = self.browser().submit(&form.submission(None)?).await?;
        let outcome = classify(&page, Some(markers::NO_CHANGES))?;
        log_outcome(&format!("artist {}", gid), &outcome);
        Ok(outcome)
    }

    /// Set the type of an artist that has none
    pub async fn set_artist_type(
        &self,
        gid: &str,
        type_id: u32,
        edit_note: &str,
        auto: bool,
    ) -> Result<EditOutcome> {
        self.edit_artist(gid, &ArtistEdit::type_only(type_id), edit_note, auto)
            .await
    }
}
