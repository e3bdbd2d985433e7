//! Participant abstraction shared by provers and verifiers.

use super::errors::ProtocolResult;

/// One participant in a two-party interactive protocol.
///
/// A party owns its internal state and mutates it only through these two
/// operations.  Messages are opaque to the execution engine: the associated
/// `Message` type is supplied by the concrete proof system, and ownership of
/// each message moves from sender to receiver on every exchange.
pub trait Party {
    /// Transcript message type exchanged with the peer.
    type Message;

    /// Consumes the most recent message from the peer and updates internal
    /// state.
    ///
    /// A message that is structurally invalid for the current state surfaces
    /// [`ProtocolError::UnexpectedMessage`](super::ProtocolError::UnexpectedMessage)
    /// immediately; it is never silently ignored.
    fn receive_message(&mut self, message: Self::Message) -> ProtocolResult<()>;

    /// Produces the next message derived from current internal state.
    ///
    /// Asking a party to send when it is not its turn surfaces
    /// [`ProtocolError::OutOfTurn`](super::ProtocolError::OutOfTurn).
    fn send_message(&mut self) -> ProtocolResult<Self::Message>;
}
