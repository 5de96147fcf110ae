use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No form matching {0} on page")]
    FormNotFound(String),

    #[error("Control not found: {0}")]
    ControlNotFound(String),

    #[error("Control {name} does not hold a {expected} value")]
    ControlType { name: String, expected: &'static str },

    #[error("Control {0} is read-only")]
    ReadOnlyControl(String),

    #[error("Control {control} has no option {value:?}")]
    OptionNotFound { control: String, value: String },

    #[error("Control {0} accepts a single value")]
    SingleValue(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Unable to post edit: {0}")]
    EditRejected(String),
}

pub type Result<T> = std::result::Result<T, Error>;
