use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Ring must contain at least 2 members")]
    InvalidRingSize,

    #[error("Signer index is outside the ring")]
    SignerIndexOutOfRange,

    #[error("Secret key is not of the expected fixed length")]
    InvalidSecretFormat,

    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    #[error("Decoy source could not supply a candidate key")]
    DecoySourceUnavailable,

    #[error("Invalid ring member public key")]
    InvalidPublicKey,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
