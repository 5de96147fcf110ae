//! Hooks the client calls out to but does not implement.
//!
//! MBID extraction and sort-name guessing live with the bot scripts; the
//! client only needs them as opaque functions. Plain closures implement
//! both traits.

use mbbot_core::edit::EntityType;

/// Pull the MBID of an entity of the given type out of a URL or text
pub trait MbidExtractor: Send + Sync {
    fn extract(&self, text: &str, entity_type: EntityType) -> Option<String>;
}

impl<F> MbidExtractor for F
where
    F: Fn(&str, EntityType) -> Option<String> + Send + Sync,
{
    fn extract(&self, text: &str, entity_type: EntityType) -> Option<String> {
        self(text, entity_type)
    }
}

/// Guess an artist sort name ("Beatles, The") from its display name
pub trait SortNameGuesser: Send + Sync {
    fn guess(&self, name: &str) -> String;
}

impl<F> SortNameGuesser for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn guess(&self, name: &str) -> String {
        self(name)
    }
}
