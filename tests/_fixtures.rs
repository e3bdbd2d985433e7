#![allow(dead_code)]

use ed25519_dalek::SigningKey;
use once_cell::sync::Lazy;

use iop_chain::chain::{Block, Chain};
use iop_chain::digest::DigestBytes;
use iop_chain::params::{ProtocolParams, ProtocolParamsBuilder};
use iop_chain::protocol::example::lfsr::{Felt, LfsrInstance, LfsrSuite, LfsrWitness};

/// Seed shared by every deterministic test run.
pub const TEST_SEED: [u8; 32] = *b"IOP-CHAIN-TEST-SEED____________0";

/// Trace length used by the fixture suites.
pub const TRACE_LENGTH: usize = 32;

/// Query budget used by the fixture suites.
pub const QUERY_BUDGET: u16 = 8;

pub static HONEST_SUITE: Lazy<LfsrSuite> = Lazy::new(honest_suite);

pub fn sample_params() -> ProtocolParams {
    ProtocolParamsBuilder::new()
        .with_seed(TEST_SEED)
        .with_queries(QUERY_BUDGET)
        .build()
        .expect("fixture params must be valid")
}

pub fn honest_suite() -> LfsrSuite {
    LfsrSuite::honest(sample_params(), Felt::new(3), TRACE_LENGTH).expect("fixture instance")
}

/// Suite whose witness trace is a constant sequence: every transition is
/// broken (`5 * 1 + 7 != 1`) and the seed boundary fails as well, so the
/// verifier rejects on its first spot check regardless of the seed.
pub fn rejecting_suite() -> LfsrSuite {
    let instance = LfsrInstance::honest(Felt::new(3), TRACE_LENGTH).expect("fixture instance");
    let witness = LfsrWitness::from_trace(vec![Felt::new(1); TRACE_LENGTH]);
    LfsrSuite::new(sample_params(), instance, witness)
}

pub fn signing_key(byte: u8) -> SigningKey {
    SigningKey::from_bytes(&[byte; 32])
}

pub fn payload_digest(byte: u8) -> DigestBytes {
    DigestBytes::from_bytes([byte; 32])
}

/// Builds a correctly linked chain of `length` blocks signed by `key`.
pub fn linked_chain(length: usize, key: &SigningKey) -> Chain {
    let mut chain = Chain::new();
    if length == 0 {
        return chain;
    }
    let mut parent = Block::genesis(payload_digest(0), key);
    for index in 1..length {
        let child = Block::child_of(&parent, payload_digest(index as u8), key);
        chain.push(parent);
        parent = child;
    }
    chain.push(parent);
    chain
}
