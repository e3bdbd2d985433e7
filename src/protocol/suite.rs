//! Factory seam for protocol-validity gate evaluation.

use super::engine::execute_protocol;
use super::errors::ProtocolResult;
use super::party::Party;
use super::verifier::VerifierParty;

/// Factory producing fresh prover/verifier pairs for one proof system.
///
/// Every gate evaluation owns its own pair: no party state is shared between
/// evaluations, so independent verifications may run concurrently as long as
/// each obtains its own instances.  Implementations are expected to derive
/// both parties from the same instance/witness material so an honest pair
/// interacts consistently.
pub trait ProtocolSuite {
    /// Transcript message type exchanged by the suite's parties.
    type Message;
    /// Prover produced by this suite.
    type Prover: Party<Message = Self::Message>;
    /// Verifier produced by this suite.
    type Verifier: VerifierParty<Message = Self::Message>;

    /// Constructs a freshly initialised prover.
    fn prover(&self) -> Self::Prover;

    /// Constructs a freshly initialised verifier.
    fn verifier(&self) -> Self::Verifier;
}

/// Evaluates the protocol-validity gate once.
///
/// Constructs one fresh prover/verifier pair from the suite and runs the full
/// interaction.  The boolean result gates cryptographic checks in the chain
/// and signing layers.
pub fn evaluate_gate<S>(suite: &S) -> ProtocolResult<bool>
where
    S: ProtocolSuite,
{
    let mut prover = suite.prover();
    let mut verifier = suite.verifier();
    execute_protocol(&mut prover, &mut verifier)
}
