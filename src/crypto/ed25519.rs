//! Ed25519 implementation of the signature facade.

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};

use super::SignatureScheme;

/// Stateless Ed25519 backend.
///
/// Safe for concurrent independent calls: the scheme itself holds no state
/// and `ed25519-dalek` keys are immutable once constructed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Scheme;

impl SignatureScheme for Ed25519Scheme {
    type SigningKey = SigningKey;
    type VerifyingKey = VerifyingKey;
    type Signature = Signature;

    fn sign(&self, data: &[u8], key: &Self::SigningKey) -> Self::Signature {
        key.sign(data)
    }

    fn verify(&self, data: &[u8], signature: &Self::Signature, key: &Self::VerifyingKey) -> bool {
        key.verify(data, signature).is_ok()
    }
}
