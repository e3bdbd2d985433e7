//! Protocol execution algorithm.

use super::errors::ProtocolResult;
use super::party::Party;
use super::verifier::VerifierParty;

/// Drives the message exchange between a prover and a verifier until the
/// verifier signals completion, then returns its verdict.
///
/// Turn order is strict alternation, verifier-initiated: each round the
/// verifier sends a message, the prover receives it and sends a response, and
/// the verifier receives that response.  The engine never inspects message
/// contents and holds no state of its own between calls; all protocol logic
/// lives inside the parties' state machines.
///
/// Both parties are expected to be freshly initialised.  A verifier that is
/// already done yields its stored verdict without any exchange.  Termination
/// is guaranteed only if the verifier bounds its own round count; see
/// [`VerifierParty`].
pub fn execute_protocol<P, V>(prover: &mut P, verifier: &mut V) -> ProtocolResult<bool>
where
    P: Party,
    V: VerifierParty<Message = P::Message>,
{
    while !verifier.done_interacting() {
        let challenge = verifier.send_message()?;
        prover.receive_message(challenge)?;
        let response = prover.send_message()?;
        verifier.receive_message(response)?;
    }
    verifier.verify()
}

/// Runs the verifier in isolation, with prover responses replaced by random
/// well-formed data.
///
/// Mirrors the verifier-only execution mode of the original protocol runtime:
/// the verifier's state is populated through
/// [`VerifierParty::fill_results_and_commitment_randomly`] and the resulting
/// verdict is returned.  Useful for measuring verifier cost without a prover;
/// the verdict itself carries no soundness meaning.
pub fn execute_verifier_only<V>(verifier: &mut V) -> ProtocolResult<bool>
where
    V: VerifierParty,
{
    verifier.fill_results_and_commitment_randomly()?;
    verifier.verify()
}
