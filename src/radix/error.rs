use crate::path::PathError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RadixError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("invalid parameter name '{name}' in path '{path}'")]
    InvalidParamName { name: String, path: String },
    #[error(
        "cannot bind parameter '{given}' because '{existing}' is already bound at the same position"
    )]
    ParamNameConflict { existing: String, given: String },
    #[error(
        "cannot merge parameter '{given}' because '{existing}' is already bound at the same position"
    )]
    MergeParamConflict { existing: String, given: String },
    #[error("mount path must not end with a wildcard: '{base}'")]
    WildcardInBasePath { base: String },
    #[error("alternation pattern failed to compile: {reason}")]
    AlternationBuild { reason: String },
}

pub type RadixResult<T> = Result<T, RadixError>;
