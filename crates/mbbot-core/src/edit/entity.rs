use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kinds of MusicBrainz entities that edits can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Area,
    Artist,
    Event,
    Instrument,
    Label,
    Place,
    Recording,
    Release,
    ReleaseGroup,
    Series,
    Url,
    Work,
}

impl EntityType {
    /// URL path segment, e.g. `/release-group/<mbid>`
    pub fn path_segment(&self) -> &'static str {
        match self {
            EntityType::ReleaseGroup => "release-group",
            other => other.as_str(),
        }
    }

    /// Name used in relationship forms and query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Area => "area",
            EntityType::Artist => "artist",
            EntityType::Event => "event",
            EntityType::Instrument => "instrument",
            EntityType::Label => "label",
            EntityType::Place => "place",
            EntityType::Recording => "recording",
            EntityType::Release => "release",
            EntityType::ReleaseGroup => "release_group",
            EntityType::Series => "series",
            EntityType::Url => "url",
            EntityType::Work => "work",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "area" => Ok(EntityType::Area),
            "artist" => Ok(EntityType::Artist),
            "event" => Ok(EntityType::Event),
            "instrument" => Ok(EntityType::Instrument),
            "label" => Ok(EntityType::Label),
            "place" => Ok(EntityType::Place),
            "recording" => Ok(EntityType::Recording),
            "release" => Ok(EntityType::Release),
            "release_group" => Ok(EntityType::ReleaseGroup),
            "series" => Ok(EntityType::Series),
            "url" => Ok(EntityType::Url),
            "work" => Ok(EntityType::Work),
            other => Err(format!("unknown entity type: {}", other)),
        }
    }
}
