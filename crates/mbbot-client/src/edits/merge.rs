use crate::client::MusicBrainzClient;
use crate::{Error, Result};
use mbbot_core::edit::EntityType;
use mbbot_core::outcome::{markers, require};

impl MusicBrainzClient {
    /// Merge `entity_ids` (row ids) into `target_id`
    ///
    /// The entities are first put in the merge queue, then the merge is
    /// confirmed; both steps must be acknowledged by the site.
    pub async fn merge(
        &self,
        entity_type: EntityType,
        entity_ids: &[u64],
        target_id: u64,
        edit_note: &str,
    ) -> Result<()> {
        let segment = entity_type.path_segment();

        let queue: Vec<(String, String)> = entity_ids
            .iter()
            .map(|id| ("add-to-merge".to_string(), id.to_string()))
            .collect();
        let page = self
            .browser()
            .post(self.url(&format!("/{}/merge_queue", segment))?, &queue)
            .await?;
        if !page.contains(markers::MERGE_QUEUE) {
            tracing::warn!("Merge queue for {} not confirmed", segment);
            return Err(Error::MergeQueue);
        }

        let mut params = vec![
            ("merge.target".to_string(), target_id.to_string()),
            ("submit".to_string(), "submit".to_string()),
            ("merge.edit_note".to_string(), edit_note.to_string()),
        ];
        params.extend(
            entity_ids
                .iter()
                .enumerate()
                .map(|(idx, id)| (format!("merge.merging.{}", idx), id.to_string())),
        );

        let page = self
            .browser()
            .post(self.url(&format!("/{}/merge", segment))?, &params)
            .await?;
        require(&page, markers::EDIT_ACCEPTED)?;

        tracing::info!(
            "Merged {} {}(s) into {}",
            entity_ids.len(),
            entity_type,
            target_id
        );
        Ok(())
    }
}
