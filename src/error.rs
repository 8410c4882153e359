use thiserror::Error;

use crate::{config::ConfigError, parse_error::ParseFileError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseFileError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Glob(#[from] glob::GlobError),
}
