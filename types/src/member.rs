use serde::{Deserialize, Serialize};

pub const ADDRESS_LEN: usize = 20;
pub const PUBLIC_KEY_LEN: usize = 32;
pub const SECRET_KEY_LEN: usize = 32;
pub const DIGEST_LEN: usize = 32;
pub const TAG_LEN: usize = 32;
pub const CHALLENGE_LEN: usize = 32;

/// Opaque address-like handle identifying a ring member.
pub type Address = [u8; ADDRESS_LEN];

pub type PublicKeyBytes = [u8; PUBLIC_KEY_LEN];
pub type MessageDigest = [u8; DIGEST_LEN];
pub type UniquenessTag = [u8; TAG_LEN];
pub type Challenge = [u8; CHALLENGE_LEN];

/// One member of an anonymity set: either the real signer or a decoy.
/// Immutable once the ring is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RingMember {
    pub identity: Address,
    pub public_key: PublicKeyBytes,
    pub ordinal: u32,
}

impl RingMember {
    pub fn new(identity: Address, public_key: PublicKeyBytes, ordinal: u32) -> Self {
        Self {
            identity,
            public_key,
            ordinal,
        }
    }
}
