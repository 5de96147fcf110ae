mod artist;
mod change;
mod counts;
mod date;
mod entity;
mod relationship;
mod release;

pub use artist::{ArtistEdit, NewArtist};
pub use change::{FieldChange, apply_changes};
pub use counts::{EditAllowance, EditLimits, parse_found_edits, todays_edits_query};
pub use date::PartialDate;
pub use entity::EntityType;
pub use relationship::RelationshipEdit;
pub use release::{MediumDraft, ReleaseDraft, TrackDraft, format_track_length};
