//! A logged-in MusicBrainz editor session driven through the website's
//! HTML forms.

pub mod browser;
pub mod client;
pub mod collaborators;
pub mod config;
pub mod error;
mod edits;
pub mod throttle;

pub use browser::Browser;
pub use client::MusicBrainzClient;
pub use collaborators::{MbidExtractor, SortNameGuesser};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use mbbot_core::edit::{EditAllowance, EditLimits};
pub use mbbot_core::{EditOutcome, SkipReason};
