//! Error classes emitted by the interactive protocol runtime.
//!
//! Structural failures (a message that does not fit the receiving party's
//! state, a verdict requested before the interaction concluded) are loud
//! `Err` values: continuing past them could fabricate a false accept or
//! reject.  Expected verification outcomes (a rejected proof, a bad
//! signature, a broken chain link) are ordinary `Ok(false)` results and never
//! appear here.

use core::fmt;

use crate::challenge::ChallengeError;

/// Result alias used throughout the protocol and chain layers.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Failure classes surfaced by parties and the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// A party received a message whose shape does not match its current
    /// internal state.
    UnexpectedMessage {
        /// Round in which the mismatch was detected.
        round: u32,
        /// Human-readable description of the mismatch.
        detail: &'static str,
    },
    /// A party was asked to produce a message it holds no state for.
    OutOfTurn {
        /// Round in which the request arrived.
        round: u32,
        /// Human-readable description of the request.
        detail: &'static str,
    },
    /// `verify` was invoked before `done_interacting` reported true.
    IncompleteInteraction,
    /// A protocol instance failed structural validation at construction.
    InvalidInstance {
        /// Description of the violated constraint.
        detail: &'static str,
    },
    /// Challenge derivation was misused.
    Challenge(ChallengeError),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnexpectedMessage { round, detail } => {
                write!(f, "unexpected message in round {round}: {detail}")
            }
            ProtocolError::OutOfTurn { round, detail } => {
                write!(f, "party asked to send out of turn in round {round}: {detail}")
            }
            ProtocolError::IncompleteInteraction => {
                write!(f, "verdict requested before the interaction concluded")
            }
            ProtocolError::InvalidInstance { detail } => {
                write!(f, "invalid protocol instance: {detail}")
            }
            ProtocolError::Challenge(err) => write!(f, "challenge derivation error: {err}"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<ChallengeError> for ProtocolError {
    fn from(err: ChallengeError) -> Self {
        ProtocolError::Challenge(err)
    }
}
