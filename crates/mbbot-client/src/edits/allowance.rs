use crate::client::MusicBrainzClient;
use crate::{Error, Result};
use mbbot_core::edit::{EditAllowance, EditLimits, parse_found_edits, todays_edits_query};

impl MusicBrainzClient {
    /// How many edits the account may still enter today
    ///
    /// Counts today's edits (UTC) through the edit search, then the open
    /// edits on the editor's profile. Needs the editor id.
    pub async fn edits_left(&self, limits: EditLimits) -> Result<EditAllowance> {
        let editor_id = self.config().editor_id.ok_or(Error::EditorIdRequired)?;
        let username = self.config().username.as_str();

        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let query = todays_edits_query(username, editor_id, &today);
        let query: Vec<(&str, &str)> = query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let page = self
            .browser()
            .open(self.url_with_query("/search/edits", &query)?)
            .await?;
        let edits_today = parse_found_edits(page.body())
            .ok_or(Error::EditCountUnavailable("remaining daily edits"))?;

        let daily = EditAllowance::compute(edits_today, 0, limits);
        if daily.is_exhausted() {
            tracing::info!("Daily edit limit reached ({} edits today)", edits_today);
            return Ok(EditAllowance::exhausted());
        }

        let page = self
            .browser()
            .open(self.url_with_query(
                &format!("/user/{}/edits/open", username),
                &[("page", "2000")],
            )?)
            .await?;
        let open_edits =
            parse_found_edits(page.body()).ok_or(Error::EditCountUnavailable("open edits"))?;

        let allowance = EditAllowance::compute(edits_today, open_edits, limits);
        tracing::info!(
            "{} edits today, {} open: {} normal edits left, {} edits left",
            edits_today,
            open_edits,
            allowance.normal_edits_left,
            allowance.edits_left
        );
        Ok(allowance)
    }
}
