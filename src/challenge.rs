//! Deterministic challenge sampling for interactive verifiers.
//!
//! Verifiers draw their challenges from a [`ChallengeStream`]: a Blake2s-based
//! pseudo-XOF seeded explicitly at construction.  The stream never touches
//! ambient randomness, so two verifiers built from the same seed and fed the
//! same absorbed data emit identical challenge sequences.  This is what makes
//! [`execute_protocol`](crate::protocol::execute_protocol) reproducible under
//! a fixed seed.
//!
//! State evolution mirrors the deterministic transcript design used by the
//! STARK pipeline this crate grew out of:
//!
//! ```text
//! state_0     = H(domain_tag || seed)
//! absorb:       state' = H(state || len(data)_LE || data)
//! block_i     = H(state || counter_LE)            (counter ratchets per block)
//! ```

use core::fmt;

use blake2::{Blake2s256, Digest};

/// Errors surfaced by challenge derivation helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeError {
    /// The exclusive range passed to `challenge_usize` was zero.
    RangeZero,
}

impl fmt::Display for ChallengeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChallengeError::RangeZero => write!(f, "challenge range must be non-zero"),
        }
    }
}

impl std::error::Error for ChallengeError {}

/// Deterministic, seedable challenge stream.
#[derive(Debug, Clone)]
pub struct ChallengeStream {
    state: [u8; 32],
    counter: u64,
}

impl ChallengeStream {
    /// Creates a stream bound to a domain tag and an explicit 32-byte seed.
    pub fn new(domain_tag: &'static [u8], seed: &[u8; 32]) -> Self {
        let mut hasher = Blake2s256::new();
        Digest::update(&mut hasher, domain_tag);
        Digest::update(&mut hasher, seed);
        Self {
            state: hasher.finalize().into(),
            counter: 0,
        }
    }

    /// Absorbs canonical bytes into the stream state.
    ///
    /// Absorption resets the block counter: challenges drawn after an absorb
    /// depend on everything absorbed so far.
    pub fn absorb(&mut self, data: &[u8]) {
        let mut hasher = Blake2s256::new();
        Digest::update(&mut hasher, self.state);
        Digest::update(&mut hasher, (data.len() as u64).to_le_bytes());
        Digest::update(&mut hasher, data);
        self.state = hasher.finalize().into();
        self.counter = 0;
    }

    /// Creates an independent stream derived from the current state.
    ///
    /// Forks inherit all absorbed data but evolve separately afterwards.
    pub fn fork(&self, label: &'static [u8]) -> Self {
        let mut hasher = Blake2s256::new();
        Digest::update(&mut hasher, self.state);
        Digest::update(&mut hasher, b"/FORK");
        Digest::update(&mut hasher, label);
        Self {
            state: hasher.finalize().into(),
            counter: 0,
        }
    }

    fn squeeze_block(&mut self) -> [u8; 32] {
        let mut hasher = Blake2s256::new();
        Digest::update(&mut hasher, self.state);
        Digest::update(&mut hasher, self.counter.to_le_bytes());
        let block: [u8; 32] = hasher.finalize().into();
        self.state = block;
        self.counter = self.counter.wrapping_add(1);
        block
    }

    /// Returns the next 64 bits from the deterministic stream.
    pub fn next_u64(&mut self) -> u64 {
        let block = self.squeeze_block();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&block[..8]);
        u64::from_le_bytes(bytes)
    }

    /// Fills the provided buffer with deterministic bytes.
    pub fn fill(&mut self, output: &mut [u8]) {
        let mut remaining = output;
        while !remaining.is_empty() {
            let block = self.squeeze_block();
            let take = remaining.len().min(block.len());
            let (dst, rest) = remaining.split_at_mut(take);
            dst.copy_from_slice(&block[..take]);
            remaining = rest;
        }
    }

    /// Draws a usize challenge within the specified exclusive range.
    pub fn challenge_usize(&mut self, range_exclusive: usize) -> Result<usize, ChallengeError> {
        if range_exclusive == 0 {
            return Err(ChallengeError::RangeZero);
        }
        let value = self.next_u64();
        Ok((value % (range_exclusive as u64)) as usize)
    }
}
