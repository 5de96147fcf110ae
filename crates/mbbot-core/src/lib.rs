pub mod edit;
pub mod error;
pub mod form;
pub mod outcome;
pub mod page;

pub use error::{Error, Result};
pub use outcome::{EditOutcome, SkipReason};
pub use page::Page;
