use thiserror::Error;

/// RFC format errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error(transparent)]
    CoreError(#[from] rolodex_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
