use serde::{Deserialize, Serialize};

/// A release to be seeded into the release editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDraft {
    pub artist: String,
    #[serde(default)]
    pub artist_mbid: Option<String>,
    pub title: String,
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub mediums: Vec<MediumDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediumDraft {
    pub format: String,
    pub position: u32,
    #[serde(default)]
    pub tracks: Vec<TrackDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDraft {
    pub position: u32,
    pub title: String,
    /// Length in seconds
    pub length: u32,
}

/// `m:ss`, minutes unpadded
pub fn format_track_length(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

impl ReleaseDraft {
    /// Release editor seed fields, in the order the editor lists them
    pub fn to_form(&self, edit_note: &str) -> Vec<(String, String)> {
        let mut form = vec![
            (
                "artist_credit.names.0.artist.name".to_string(),
                self.artist.clone(),
            ),
            ("artist_credit.names.0.name".to_string(), self.artist.clone()),
        ];

        if let Some(mbid) = self.artist_mbid.as_ref().filter(|m| !m.is_empty()) {
            form.push(("artist_credit.names.0.mbid".to_string(), mbid.clone()));
        }

        form.push(("name".to_string(), self.title.clone()));

        if let Some(date) = self.date.as_ref().filter(|d| !d.is_empty()) {
            for (part, value) in ["year", "month", "day"].iter().zip(date.split('-')) {
                form.push((format!("date.{}", part), value.to_string()));
            }
        }

        if let Some(label) = self.label.as_ref().filter(|l| !l.is_empty()) {
            form.push(("labels.0.name".to_string(), label.clone()));
        }
        if let Some(barcode) = self.barcode.as_ref().filter(|b| !b.is_empty()) {
            form.push(("barcode".to_string(), barcode.clone()));
        }

        for (medium_no, medium) in self.mediums.iter().enumerate() {
            form.push((format!("mediums.{}.format", medium_no), medium.format.clone()));
            form.push((
                format!("mediums.{}.position", medium_no),
                medium.position.to_string(),
            ));
            for (track_no, track) in medium.tracks.iter().enumerate() {
                let prefix = format!("mediums.{}.track.{}", medium_no, track_no);
                form.push((format!("{}.position", prefix), track.position.to_string()));
                form.push((format!("{}.name", prefix), track.title.clone()));
                form.push((format!("{}.length", prefix), format_track_length(track.length)));
            }
        }

        form.push(("edit_note".to_string(), edit_note.to_string()));
        form
    }
}
