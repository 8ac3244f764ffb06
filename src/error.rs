use hex::FromHexError;
use thiserror::Error;

use crate::algorithm::Algorithm;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    #[error(
        "Unrecognized digest algorithm: {0}. Supported algorithms: {supported}",
        supported = Algorithm::supported_names()
    )]
    UnrecognizedAlgorithm(String),

    #[error("Expected stream to have digest '{expected}' but was '{actual}'")]
    DigestMismatch { expected: String, actual: String },

    #[error("No digest found that matches {algorithm} (available: {available})")]
    NoDigestAlgorithmOverlap { algorithm: Algorithm, available: String },

    #[error("No digests provided")]
    NoDigestsProvided,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

impl From<FromHexError> for DigestError {
    fn from(err: FromHexError) -> Self {
        DigestError::InvalidHex(err.to_string())
    }
}

pub type Result<T, E = DigestError> = std::result::Result<T, E>;
