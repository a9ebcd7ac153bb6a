use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("route path is empty")]
    Empty,
    #[error("route path must start with '/': '{path}'")]
    MissingLeadingSlash { path: String },
    #[error("route path must be ASCII: '{path}'")]
    NonAscii { path: String },
    #[error("route path must not end with '/': '{path}'")]
    TrailingSlash { path: String },
}

pub type PathResult<T> = Result<T, PathError>;
