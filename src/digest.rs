//! Digest primitives shared by the chain and protocol layers.
//!
//! All hashes handled by this crate are fixed 32-byte values wrapped in
//! [`DigestBytes`] so that call sites never confuse raw payload bytes with
//! canonical digests.  Block hashing uses BLAKE3 with an explicit domain tag;
//! the helper lives here so every producer derives hashes the same way.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Length in bytes of every digest handled by the crate.
pub const DIGEST_LEN: usize = 32;

/// Canonical 32-byte digest wrapper.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DigestBytes {
    /// Raw digest bytes.
    pub bytes: [u8; DIGEST_LEN],
}

impl DigestBytes {
    /// The all-zero digest, used as the predecessor link of a genesis block.
    pub const ZERO: DigestBytes = DigestBytes {
        bytes: [0u8; DIGEST_LEN],
    };

    /// Constructs a digest from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.bytes
    }

    /// Consumes the digest and returns the underlying array.
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.bytes
    }

    /// Returns a helper that formats the digest as lowercase hexadecimal.
    pub fn to_hex(&self) -> HexOutput {
        HexOutput(self.bytes)
    }
}

impl From<[u8; DIGEST_LEN]> for DigestBytes {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<DigestBytes> for [u8; DIGEST_LEN] {
    fn from(digest: DigestBytes) -> Self {
        digest.into_bytes()
    }
}

impl From<blake3::Hash> for DigestBytes {
    fn from(hash: blake3::Hash) -> Self {
        Self::from_bytes(*hash.as_bytes())
    }
}

impl fmt::Debug for DigestBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigestBytes(0x{})", self.to_hex())
    }
}

/// Hexadecimal representation of a digest.
#[derive(Clone, Copy)]
pub struct HexOutput([u8; DIGEST_LEN]);

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Computes a domain-separated BLAKE3 digest over the concatenation of the
/// provided parts.  Each part is length-prefixed so distinct splits of the
/// same byte stream hash differently.
pub fn tagged_digest(domain_tag: &'static [u8], parts: &[&[u8]]) -> DigestBytes {
    let mut hasher = blake3::Hasher::new();
    hasher.update(domain_tag);
    for part in parts {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    DigestBytes::from(hasher.finalize())
}
