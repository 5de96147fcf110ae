use crate::client::MusicBrainzClient;
use crate::Result;
use regex::Regex;

impl MusicBrainzClient {
    /// Attach an edit note to one of the editor's recent edits
    ///
    /// Useful for edits entered through channels without note support.
    /// `identify` receives each listed edit's number and the raw HTML of its
    /// details block; the first edit it accepts gets the note. Returns the
    /// number of the annotated edit, or `None` if nothing matched.
    pub async fn add_edit_note<F>(&self, mut identify: F, edit_note: &str) -> Result<Option<String>>
    where
        F: FnMut(&str, &str) -> bool,
    {
        let page = self
            .browser()
            .open(self.url(&format!("/user/{}/edits", self.config().username))?)
            .await?;
        let mut form = page.select_post_form("/edit")?;

        let pattern = Regex::new(&format!(
            r#"(?s)<h2><a href="{}/edit/([0-9]+).*?<div class="edit-details">(.*?)</div>"#,
            regex::escape(&self.config().server)
        ))?;

        let matched = pattern
            .captures_iter(page.body())
            .enumerate()
            .find_map(|(index, captures)| {
                let edit_nr = &captures[1];
                identify(edit_nr, &captures[2]).then(|| (index, edit_nr.to_string()))
            });

        let Some((index, edit_nr)) = matched else {
            tracing::info!("No listed edit matched, no note added");
            return Ok(None);
        };

        form.set_text(&format!("enter-vote.vote.{}.edit_note", index), edit_note)?;
        self.browser().submit(&form.submission(None)?).await?;

        tracing::info!("Added edit note to edit #{}", edit_nr);
        Ok(Some(edit_nr))
    }

    /// Cancel one of the editor's open edits
    pub async fn cancel_edit(&self, edit_id: u64, edit_note: &str) -> Result<()> {
        let page = self
            .browser()
            .open(self.url(&format!("/edit/{}/cancel", edit_id))?)
            .await?;
        let mut form = page.select_post_form("/cancel")?;
        if !edit_note.is_empty() {
            form.set_text("confirm.edit_note", edit_note)?;
        }

        self.browser().submit(&form.submission(None)?).await?;
        tracing::info!("Cancelled edit #{}", edit_id);
        Ok(())
    }
}
