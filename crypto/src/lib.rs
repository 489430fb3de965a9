#![cfg_attr(not(feature = "std"), no_std)]

// Declare modules
pub mod backend;
pub mod compliance;
pub mod errors;
pub mod keys;
pub mod ring;
pub mod signature;
pub mod tag;
pub mod utils;

// Re-export commonly used items
pub use errors::{CryptoError, Result};

// Shared data types
pub use darkring_types::{
    Address, Challenge, ComplianceProof, MessageDigest, PublicKeyBytes, RingMember, RingSignature,
    UniquenessTag,
};

// Challenge backend exports
pub use backend::{ChallengeBackend, HashBackend};

// Anonymity set builder exports
pub use ring::{build_ring, DecoySource};

// Key helper exports
pub use keys::{address_from_public_key, derive_public_key, message_digest, random_secret};

// Uniqueness tag exports
pub use tag::uniqueness_tag;

// Ring signature exports
pub use signature::{
    sign, sign_with, signature_from_bytes, signature_to_bytes, verify, verify_with,
};

// Compliance proof exports
pub use compliance::export_proof;
