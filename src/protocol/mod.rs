//! # Interactive protocol runtime
//!
//! ```text
//! protocol
//! ├── party     — participant abstraction ([`Party`])
//! ├── verifier  — verifier refinement ([`VerifierParty`])
//! ├── engine    — execution loop ([`execute_protocol`])
//! ├── suite     — gate factory seam ([`ProtocolSuite`], [`evaluate_gate`])
//! ├── errors    — structural failure classes ([`ProtocolError`])
//! └── example   — worked LFSR spot-check protocol
//! ```
//!
//! One protocol round, verifier-initiated:
//!
//! | Step | Direction | Operation |
//! |------|-----------|-----------|
//! | 1 | verifier to prover | [`Party::send_message`] then [`Party::receive_message`] |
//! | 2 | prover to verifier | [`Party::send_message`] then [`Party::receive_message`] |
//! | 3 | loop check | [`VerifierParty::done_interacting`] |
//!
//! After the loop ends the engine returns [`VerifierParty::verify`].  Message
//! ownership moves from sender to receiver on each exchange; no message is
//! ever aliased by both parties.

mod engine;
mod errors;
mod party;
mod suite;
mod verifier;

pub mod example;

pub use engine::{execute_protocol, execute_verifier_only};
pub use errors::{ProtocolError, ProtocolResult};
pub use party::Party;
pub use suite::{evaluate_gate, ProtocolSuite};
pub use verifier::VerifierParty;
