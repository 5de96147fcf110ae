use super::date::PartialDate;
use super::entity::EntityType;
use crate::form::FieldValue;
use serde::{Deserialize, Serialize};

/// A change of an existing relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEdit {
    pub id: u64,
    pub entity0_type: EntityType,
    pub entity1_type: EntityType,
    /// Link type the relationship is expected to have right now
    pub old_link_type_id: u32,
    pub new_link_type_id: u32,
    /// Attribute controls, keyed by the suffix after `ar.attrs.`
    #[serde(default)]
    pub attributes: Vec<(String, FieldValue)>,
    #[serde(default)]
    pub begin_date: PartialDate,
    #[serde(default)]
    pub end_date: PartialDate,
}

impl RelationshipEdit {
    pub fn new(
        id: u64,
        entity0_type: EntityType,
        entity1_type: EntityType,
        old_link_type_id: u32,
        new_link_type_id: u32,
    ) -> Self {
        Self {
            id,
            entity0_type,
            entity1_type,
            old_link_type_id,
            new_link_type_id,
            attributes: Vec::new(),
            begin_date: PartialDate::default(),
            end_date: PartialDate::default(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.attributes.push((name.into(), value));
        self
    }

    pub fn with_begin_date(mut self, date: PartialDate) -> Self {
        self.begin_date = date;
        self
    }

    pub fn with_end_date(mut self, date: PartialDate) -> Self {
        self.end_date = date;
        self
    }
}
