#![cfg_attr(not(feature = "std"), no_std)]

pub mod member;
pub mod proof;
pub mod signature;

pub use member::{
    Address, Challenge, MessageDigest, PublicKeyBytes, RingMember, UniquenessTag, ADDRESS_LEN,
    CHALLENGE_LEN, DIGEST_LEN, PUBLIC_KEY_LEN, SECRET_KEY_LEN, TAG_LEN,
};
pub use proof::ComplianceProof;
pub use signature::RingSignature;
