//! Block and chain integrity verification gated on the protocol verdict.

use tracing::{debug, warn};

use crate::crypto::SignatureScheme;
use crate::protocol::{evaluate_gate, ProtocolResult, ProtocolSuite};

use super::types::{BlockAccess, ChainAccess};

/// Verifier combining a signature scheme with a protocol-validity gate.
///
/// Gate policy: the interactive protocol runs once per top-level entry point.
/// [`verify_block`](Self::verify_block) evaluates the gate for the single
/// block it checks; [`verify_chain`](Self::verify_chain) evaluates it once
/// for the whole chain and performs signature-only checks per block.  The
/// gate is never re-evaluated per block inside a chain walk.
///
/// Verification outcomes are booleans; the failing block index of a rejected
/// chain is reported through the `tracing` diagnostics side channel, not the
/// return value.
#[derive(Debug, Clone)]
pub struct ChainVerifier<S, G> {
    scheme: S,
    suite: G,
}

impl<S, G> ChainVerifier<S, G>
where
    S: SignatureScheme,
    G: ProtocolSuite,
{
    /// Creates a verifier from a signature scheme and a gate suite.
    pub fn new(scheme: S, suite: G) -> Self {
        Self { scheme, suite }
    }

    /// Evaluates the protocol-validity gate with a fresh prover/verifier
    /// pair.
    pub fn protocol_gate(&self) -> ProtocolResult<bool> {
        evaluate_gate(&self.suite)
    }

    fn block_signature_valid<B>(&self, block: &B) -> bool
    where
        B: BlockAccess<Signature = S::Signature, VerifyingKey = S::VerifyingKey>,
    {
        self.scheme
            .verify(block.hash().as_bytes(), block.signature(), block.verifying_key())
    }

    /// Verifies a single block.
    ///
    /// The protocol gate runs first; a rejected protocol short-circuits and
    /// the signature is never examined, so an invalid proof cannot be masked
    /// by a valid-looking signature check performed in isolation.
    pub fn verify_block<B>(&self, block: &B) -> ProtocolResult<bool>
    where
        B: BlockAccess<Signature = S::Signature, VerifyingKey = S::VerifyingKey>,
    {
        if !self.protocol_gate()? {
            warn!("protocol gate rejected; block signature not examined");
            return Ok(false);
        }
        Ok(self.block_signature_valid(block))
    }

    /// Verifies a whole chain.
    ///
    /// The gate is evaluated once up front; an empty chain is vacuously
    /// valid.  Every block must carry a valid signature over its claimed
    /// hash, and every block past the genesis must link to the actual hash
    /// of its predecessor.  Verification fails fast on the first bad block
    /// or broken link, with no partial result.
    pub fn verify_chain<C>(&self, chain: &C) -> ProtocolResult<bool>
    where
        C: ChainAccess,
        C::Block: BlockAccess<Signature = S::Signature, VerifyingKey = S::VerifyingKey>,
    {
        if !self.protocol_gate()? {
            warn!("protocol gate rejected; chain rejected without block checks");
            return Ok(false);
        }
        if chain.is_empty() {
            return Ok(true);
        }
        let mut previous_hash = None;
        for index in 0..chain.len() {
            let block = match chain.block_at(index) {
                Some(block) => block,
                None => {
                    warn!(index, "chain accessor returned no block inside its length");
                    return Ok(false);
                }
            };
            if !self.block_signature_valid(block) {
                warn!(index, "block signature rejected");
                return Ok(false);
            }
            if let Some(previous_hash) = previous_hash {
                if block.previous_hash() != previous_hash {
                    warn!(index, "chain linkage mismatch with predecessor hash");
                    return Ok(false);
                }
            }
            previous_hash = Some(block.hash());
        }
        debug!(length = chain.len(), "chain verified");
        Ok(true)
    }

    /// Signs a payload, releasing the signature only when the protocol gate
    /// passes.
    ///
    /// Returns `Ok(None)` when the gate fails, even though the underlying
    /// primitive produced a signature.
    pub fn sign_data(
        &self,
        data: &[u8],
        key: &S::SigningKey,
    ) -> ProtocolResult<Option<S::Signature>> {
        let signature = self.scheme.sign(data, key);
        if !self.protocol_gate()? {
            warn!("protocol gate rejected; signature withheld");
            return Ok(None);
        }
        Ok(Some(signature))
    }

    /// Verifies a detached signature over a payload.
    ///
    /// True only when the external signature check passes and the protocol
    /// gate passes.  The cheaper signature check runs first.
    pub fn verify_data(
        &self,
        data: &[u8],
        signature: &S::Signature,
        key: &S::VerifyingKey,
    ) -> ProtocolResult<bool> {
        if !self.scheme.verify(data, signature, key) {
            return Ok(false);
        }
        self.protocol_gate()
    }
}
