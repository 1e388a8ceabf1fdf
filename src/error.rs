use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("empty message: enter a message before sending")]
    EmptyMessage,

    #[error("view unavailable: {0}")]
    ViewUnavailable(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
