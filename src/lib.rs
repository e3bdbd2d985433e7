//! Core library entry point for the `iop-chain` protocol engine.
//!
//! The crate combines two layers.  The [`protocol`] module is a generic
//! interactive-proof runtime: a prover and a verifier exchange opaque
//! transcript messages under strict verifier-initiated alternation until the
//! verifier reaches a verdict.  The [`chain`] module layers block and chain
//! integrity verification on top of it: every cryptographic check is gated
//! on the protocol verdict, and chain walks additionally enforce hash
//! linkage between consecutive blocks.
//!
//! Concrete cryptographic primitives enter through the [`crypto`] facade and
//! concrete proof systems through [`protocol::ProtocolSuite`]; the engine
//! itself never inspects message contents and holds no global state.
//! Verifier randomness is injected through [`params::ProtocolParams`], so
//! executions are reproducible under a fixed seed.

pub mod challenge;
pub mod chain;
pub mod crypto;
pub mod digest;
pub mod params;
pub mod protocol;

pub use chain::{Block, BlockAccess, Chain, ChainAccess, ChainVerifier};
pub use crypto::{Ed25519Scheme, SignatureScheme};
pub use digest::DigestBytes;
pub use params::{ProtocolParams, ProtocolParamsBuilder};
pub use protocol::{
    evaluate_gate, execute_protocol, execute_verifier_only, Party, ProtocolError, ProtocolResult,
    ProtocolSuite, VerifierParty,
};
