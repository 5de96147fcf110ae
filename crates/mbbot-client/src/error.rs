use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Form(#[from] mbbot_core::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Unable to login as {username}: landed on {landed}")]
    LoginFailed { username: String, landed: String },

    #[error("An editor id is required to count edits")]
    EditorIdRequired,

    #[error("Could not determine {0}")]
    EditCountUnavailable(&'static str),

    #[error("Unable to add items to merge queue")]
    MergeQueue,

    #[error("No {entity} MBID in {url}")]
    MbidNotFound { entity: String, url: String },

    #[error("No {0} configured")]
    MissingCollaborator(&'static str),
}

impl Error {
    /// The site answered but did not confirm the edit
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            Error::Form(mbbot_core::Error::EditRejected(_)) | Error::MergeQueue
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
