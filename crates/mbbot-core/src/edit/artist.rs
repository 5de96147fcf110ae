use super::date::PartialDate;
use serde::{Deserialize, Serialize};

/// An artist to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArtist {
    pub name: String,
    /// Guessed from the name when absent
    #[serde(default)]
    pub sort_name: Option<String>,
}

impl NewArtist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sort_name: None,
        }
    }
}

/// Fields to fill in on an existing artist
///
/// Every `Some` field is an update request. Fields that already hold data
/// on the site are never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistEdit {
    pub country_id: Option<u32>,
    pub type_id: Option<u32>,
    pub gender_id: Option<u32>,
    pub begin_date: Option<PartialDate>,
    pub end_date: Option<PartialDate>,
    pub comment: Option<String>,
}

impl ArtistEdit {
    pub fn type_only(type_id: u32) -> Self {
        Self {
            type_id: Some(type_id),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
