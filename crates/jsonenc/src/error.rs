use thiserror::Error;

use std::io;

/// Errors raised while rendering an encoded value.
///
/// Building and applying encoders never fails; only the text/byte rendering
/// helpers return this type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
