//! Block and chain data models plus the accessor seams used by the
//! integrity verifier.

use ed25519_dalek::{Signature, Signer as _, SigningKey, VerifyingKey};

use crate::digest::{tagged_digest, DigestBytes};

/// Domain tag prepended when deriving canonical block hashes.
const BLOCK_HASH_DOMAIN_TAG: &[u8] = b"IOP-CHAIN-BLOCK-V1";

/// Read access to one block, however it is stored.
///
/// External storage backends implement this so the integrity verifier never
/// depends on a concrete block representation.
pub trait BlockAccess {
    /// Detached signature value carried by the block.
    type Signature;
    /// Public key the signature is verified against.
    type VerifyingKey;

    /// Canonical hash claimed by the block.
    fn hash(&self) -> &DigestBytes;

    /// Hash of the predecessor block.  Unconstrained for a genesis block.
    fn previous_hash(&self) -> &DigestBytes;

    /// Signature over the claimed hash.
    fn signature(&self) -> &Self::Signature;

    /// Key the block's signature must verify under.
    fn verifying_key(&self) -> &Self::VerifyingKey;
}

/// Read access to an ordered block sequence.
pub trait ChainAccess {
    /// Block representation stored by the chain.
    type Block;

    /// Number of blocks in the chain.
    fn len(&self) -> usize;

    /// Reports whether the chain holds no blocks.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the block at `index`, if present.
    fn block_at(&self, index: usize) -> Option<&Self::Block>;
}

/// In-memory block signed with Ed25519.
///
/// Immutable once constructed.  The canonical hash commits to the height,
/// the predecessor hash and the payload digest; the signature covers the
/// hash bytes.
#[derive(Debug, Clone)]
pub struct Block {
    height: u64,
    payload_digest: DigestBytes,
    previous_hash: DigestBytes,
    hash: DigestBytes,
    signature: Signature,
    verifying_key: VerifyingKey,
}

impl Block {
    /// Builds and signs a genesis block.  The predecessor link is the zero
    /// digest and carries no meaning.
    pub fn genesis(payload_digest: DigestBytes, signing_key: &SigningKey) -> Self {
        Self::sealed(0, DigestBytes::ZERO, payload_digest, signing_key)
    }

    /// Builds and signs a block extending `parent`.
    pub fn child_of(parent: &Block, payload_digest: DigestBytes, signing_key: &SigningKey) -> Self {
        Self::sealed(parent.height + 1, parent.hash, payload_digest, signing_key)
    }

    /// Builds and signs a block with an explicit predecessor link.
    pub fn sealed(
        height: u64,
        previous_hash: DigestBytes,
        payload_digest: DigestBytes,
        signing_key: &SigningKey,
    ) -> Self {
        let hash = Self::compute_hash(height, &previous_hash, &payload_digest);
        let signature = signing_key.sign(hash.as_bytes());
        Self {
            height,
            payload_digest,
            previous_hash,
            hash,
            signature,
            verifying_key: signing_key.verifying_key(),
        }
    }

    /// Assembles a block from externally produced parts without deriving or
    /// checking anything.  Integrity of such blocks is established by the
    /// chain verifier, not at construction.
    pub fn from_parts(
        height: u64,
        payload_digest: DigestBytes,
        previous_hash: DigestBytes,
        hash: DigestBytes,
        signature: Signature,
        verifying_key: VerifyingKey,
    ) -> Self {
        Self {
            height,
            payload_digest,
            previous_hash,
            hash,
            signature,
            verifying_key,
        }
    }

    /// Derives the canonical hash for the given block fields.
    pub fn compute_hash(
        height: u64,
        previous_hash: &DigestBytes,
        payload_digest: &DigestBytes,
    ) -> DigestBytes {
        tagged_digest(
            BLOCK_HASH_DOMAIN_TAG,
            &[
                &height.to_le_bytes(),
                previous_hash.as_bytes(),
                payload_digest.as_bytes(),
            ],
        )
    }

    /// Returns the block height.
    pub const fn height(&self) -> u64 {
        self.height
    }

    /// Returns the payload digest committed by the hash.
    pub const fn payload_digest(&self) -> &DigestBytes {
        &self.payload_digest
    }
}

impl BlockAccess for Block {
    type Signature = Signature;
    type VerifyingKey = VerifyingKey;

    fn hash(&self) -> &DigestBytes {
        &self.hash
    }

    fn previous_hash(&self) -> &DigestBytes {
        &self.previous_hash
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

/// In-memory ordered block sequence.  Index 0 is the genesis block.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Appends a block.  No linkage validation is performed here; integrity
    /// is established by the chain verifier.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Returns the stored blocks.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl From<Vec<Block>> for Chain {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl ChainAccess for Chain {
    type Block = Block;

    fn len(&self) -> usize {
        self.blocks.len()
    }

    fn block_at(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }
}
