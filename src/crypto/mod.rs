//! Cryptographic facade consumed by the chain and signing layers.
//!
//! The engine never implements signing primitives itself; it consumes them
//! through [`SignatureScheme`].  Implementations must be stateless or
//! internally synchronized (they are shared by concurrent verifications) and
//! `verify` must be deterministic for identical inputs.

pub mod ed25519;

pub use ed25519::Ed25519Scheme;

/// External signing/verification primitive.
pub trait SignatureScheme {
    /// Private signing key material.
    type SigningKey;
    /// Public verification key material.
    type VerifyingKey;
    /// Detached signature value.
    type Signature;

    /// Signs the payload with the provided key.
    fn sign(&self, data: &[u8], key: &Self::SigningKey) -> Self::Signature;

    /// Verifies a detached signature over the payload.
    ///
    /// A failed check is an expected outcome reported as `false`, never an
    /// error.
    fn verify(&self, data: &[u8], signature: &Self::Signature, key: &Self::VerifyingKey) -> bool;
}
