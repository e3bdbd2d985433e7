//! Linear-feedback shift register spot-check protocol.
//!
//! This module provides a compact worked example that exercises the party
//! traits, the execution engine and the gate seam end to end.  The claimed
//! statement is deliberately simple: iterating `next = ALPHA * state + BETA`
//! over the Goldilocks prime field from a public seed for `length - 1` steps
//! ends at a public output.  The prover holds the full state trace as its
//! witness; each round the verifier samples a random step index from its
//! seeded challenge stream and spot-checks the corresponding transition,
//! together with the boundary values whenever the sampled step touches the
//! first or last trace entry.
//!
//! Each spot check catches a fixed cheating trace with probability at least
//! `broken_transitions / (length - 1)`, so the query budget in
//! [`ProtocolParams`] tunes the soundness error.  The verifier also stops
//! early with a rejection the moment a check fails.

use crate::challenge::ChallengeStream;
use crate::digest::{tagged_digest, DigestBytes};
use crate::params::ProtocolParams;
use crate::protocol::{Party, ProtocolError, ProtocolResult, ProtocolSuite, VerifierParty};

/// Goldilocks prime `2^64 - 2^32 + 1`.
const MODULUS: u64 = 0xffff_ffff_0000_0001;

/// Multiplicative factor applied during the transition.
pub const ALPHA: Felt = Felt(5);

/// Additive tweak applied during the transition.
pub const BETA: Felt = Felt(7);

/// Domain tag seeding the verifier's challenge stream.
const CHALLENGE_DOMAIN_TAG: &[u8] = b"IOP-CHAIN-LFSR-CHAL-V1";

/// Domain tag used when binding an instance into the challenge stream.
const INSTANCE_DOMAIN_TAG: &[u8] = b"IOP-CHAIN-LFSR-INST-V1";

/// Canonical encoded width of one field element.
const FELT_ENCODED_BYTES: usize = 8;

/// Canonical encoded width of one opening message.
const OPENING_ENCODED_BYTES: usize = 2 * FELT_ENCODED_BYTES;

/// Field element of the Goldilocks prime field in canonical reduced form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Felt(u64);

impl Felt {
    /// Constructs a field element, reducing the value into canonical form.
    pub const fn new(value: u64) -> Self {
        Self(value % MODULUS)
    }

    /// Returns the canonical u64 representation.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the canonical little-endian encoding.
    pub const fn to_le_bytes(self) -> [u8; FELT_ENCODED_BYTES] {
        self.0.to_le_bytes()
    }

    fn add(self, rhs: Felt) -> Felt {
        Felt((((self.0 as u128) + (rhs.0 as u128)) % (MODULUS as u128)) as u64)
    }

    fn mul(self, rhs: Felt) -> Felt {
        Felt((((self.0 as u128) * (rhs.0 as u128)) % (MODULUS as u128)) as u64)
    }
}

/// Applies the public LFSR transition to one state value.
pub fn transition(state: Felt) -> Felt {
    ALPHA.mul(state).add(BETA)
}

/// Public instance of the spot-check protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfsrInstance {
    /// First trace value.
    pub seed: Felt,
    /// Number of trace entries; at least two.
    pub length: usize,
    /// Claimed final trace value.
    pub output: Felt,
}

impl LfsrInstance {
    /// Creates an instance, validating the trace length.
    pub fn new(seed: Felt, length: usize, output: Felt) -> ProtocolResult<Self> {
        if length < 2 {
            return Err(ProtocolError::InvalidInstance {
                detail: "trace must contain at least two entries",
            });
        }
        Ok(Self {
            seed,
            length,
            output,
        })
    }

    /// Creates an instance whose output is derived by honest iteration.
    pub fn honest(seed: Felt, length: usize) -> ProtocolResult<Self> {
        let instance = Self::new(seed, length, seed)?;
        let mut state = seed;
        for _ in 0..length - 1 {
            state = transition(state);
        }
        Ok(Self {
            output: state,
            ..instance
        })
    }

    /// Number of transitions covered by the trace.
    pub const fn step_count(&self) -> usize {
        self.length - 1
    }

    /// Canonical digest binding the instance into the challenge stream.
    pub fn binding_digest(&self) -> DigestBytes {
        tagged_digest(
            INSTANCE_DOMAIN_TAG,
            &[
                &self.seed.to_le_bytes(),
                &(self.length as u64).to_le_bytes(),
                &self.output.to_le_bytes(),
            ],
        )
    }
}

/// Prover witness: the full state trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfsrWitness {
    trace: Vec<Felt>,
}

impl LfsrWitness {
    /// Generates the honest trace for an instance.
    pub fn generate(instance: &LfsrInstance) -> Self {
        let mut trace = Vec::with_capacity(instance.length);
        let mut state = instance.seed;
        trace.push(state);
        for _ in 0..instance.step_count() {
            state = transition(state);
            trace.push(state);
        }
        Self { trace }
    }

    /// Wraps an arbitrary trace.  No consistency validation is performed;
    /// soundness against a cheating trace is the verifier's job.
    pub fn from_trace(trace: Vec<Felt>) -> Self {
        Self { trace }
    }

    /// Returns the trace entries.
    pub fn trace(&self) -> &[Felt] {
        &self.trace
    }
}

/// Challenge naming one transition to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepQuery {
    /// Index of the queried transition, in `0..length - 1`.
    pub index: u64,
}

/// Prover response opening one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOpening {
    /// Trace value at the queried index.
    pub current: Felt,
    /// Trace value at the queried index plus one.
    pub next: Felt,
}

/// Transcript messages exchanged by the spot-check protocol.
///
/// A closed tagged union: the engine moves these by value and never inspects
/// them, while each party matches on the variant its state machine expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LfsrMessage {
    /// Verifier challenge.
    Query(StepQuery),
    /// Prover response.
    Opening(StepOpening),
}

/// Prover party answering step queries from its witness trace.
#[derive(Debug, Clone)]
pub struct LfsrProver {
    trace: Vec<Felt>,
    pending: Option<usize>,
    round: u32,
}

impl LfsrProver {
    /// Creates a freshly initialised prover holding the witness trace.
    pub fn new(witness: LfsrWitness) -> Self {
        Self {
            trace: witness.trace,
            pending: None,
            round: 0,
        }
    }
}

impl Party for LfsrProver {
    type Message = LfsrMessage;

    fn receive_message(&mut self, message: Self::Message) -> ProtocolResult<()> {
        match message {
            LfsrMessage::Query(query) => {
                if self.pending.is_some() {
                    return Err(ProtocolError::UnexpectedMessage {
                        round: self.round,
                        detail: "query arrived while a response is pending",
                    });
                }
                let index = query.index as usize;
                if index + 1 >= self.trace.len() {
                    return Err(ProtocolError::UnexpectedMessage {
                        round: self.round,
                        detail: "query index beyond the final transition",
                    });
                }
                self.pending = Some(index);
                Ok(())
            }
            LfsrMessage::Opening(_) => Err(ProtocolError::UnexpectedMessage {
                round: self.round,
                detail: "prover accepts queries only",
            }),
        }
    }

    fn send_message(&mut self) -> ProtocolResult<Self::Message> {
        match self.pending.take() {
            Some(index) => {
                self.round += 1;
                Ok(LfsrMessage::Opening(StepOpening {
                    current: self.trace[index],
                    next: self.trace[index + 1],
                }))
            }
            None => Err(ProtocolError::OutOfTurn {
                round: self.round,
                detail: "no outstanding query to answer",
            }),
        }
    }
}

/// Verifier party sampling step queries and checking openings.
#[derive(Debug, Clone)]
pub struct LfsrVerifier {
    instance: LfsrInstance,
    queries: u16,
    stream: ChallengeStream,
    pending: Option<usize>,
    rounds_completed: u16,
    outcome: Option<bool>,
    round: u32,
    committed_proof_bytes: usize,
    sent_proof_bytes: usize,
    queried_data_bytes: usize,
}

impl LfsrVerifier {
    /// Creates a freshly initialised verifier.
    ///
    /// The challenge stream is seeded from the parameter set and bound to the
    /// instance digest, so distinct instances draw distinct query sequences
    /// and identical seeds replay identically.  All byte estimates are fixed
    /// here, before any interaction.
    pub fn new(instance: LfsrInstance, params: &ProtocolParams) -> Self {
        let mut stream = ChallengeStream::new(CHALLENGE_DOMAIN_TAG, params.seed());
        stream.absorb(instance.binding_digest().as_bytes());
        let queries = params.queries();
        let committed_proof_bytes = instance.length * FELT_ENCODED_BYTES;
        let sent_proof_bytes = queries as usize * OPENING_ENCODED_BYTES;
        // Every transmitted opening is committed data the verifier reads.
        let queried_data_bytes = sent_proof_bytes;
        Self {
            instance,
            queries,
            stream,
            pending: None,
            rounds_completed: 0,
            outcome: None,
            round: 0,
            committed_proof_bytes,
            sent_proof_bytes,
            queried_data_bytes,
        }
    }

    fn check_opening(&self, index: usize, opening: &StepOpening) -> bool {
        let mut ok = opening.next == transition(opening.current);
        if index == 0 {
            ok &= opening.current == self.instance.seed;
        }
        if index == self.instance.step_count() - 1 {
            ok &= opening.next == self.instance.output;
        }
        ok
    }
}

impl Party for LfsrVerifier {
    type Message = LfsrMessage;

    fn receive_message(&mut self, message: Self::Message) -> ProtocolResult<()> {
        match message {
            LfsrMessage::Opening(opening) => {
                let index = match self.pending.take() {
                    Some(index) => index,
                    None => {
                        return Err(ProtocolError::UnexpectedMessage {
                            round: self.round,
                            detail: "opening arrived without an outstanding query",
                        })
                    }
                };
                self.round += 1;
                if self.check_opening(index, &opening) {
                    self.rounds_completed += 1;
                    if self.rounds_completed == self.queries {
                        self.outcome = Some(true);
                    }
                } else {
                    self.outcome = Some(false);
                }
                Ok(())
            }
            LfsrMessage::Query(_) => Err(ProtocolError::UnexpectedMessage {
                round: self.round,
                detail: "verifier accepts openings only",
            }),
        }
    }

    fn send_message(&mut self) -> ProtocolResult<Self::Message> {
        if self.outcome.is_some() {
            return Err(ProtocolError::OutOfTurn {
                round: self.round,
                detail: "interaction already concluded",
            });
        }
        if self.pending.is_some() {
            return Err(ProtocolError::OutOfTurn {
                round: self.round,
                detail: "awaiting the prover's opening",
            });
        }
        let index = self.stream.challenge_usize(self.instance.step_count())?;
        self.pending = Some(index);
        Ok(LfsrMessage::Query(StepQuery {
            index: index as u64,
        }))
    }
}

impl VerifierParty for LfsrVerifier {
    fn done_interacting(&self) -> bool {
        self.outcome.is_some()
    }

    fn verify(&self) -> ProtocolResult<bool> {
        self.outcome.ok_or(ProtocolError::IncompleteInteraction)
    }

    fn expected_committed_proof_bytes(&self) -> usize {
        self.committed_proof_bytes
    }

    fn expected_sent_proof_bytes(&self) -> usize {
        self.sent_proof_bytes
    }

    fn expected_queried_data_bytes(&self) -> usize {
        self.queried_data_bytes
    }

    fn fill_results_and_commitment_randomly(&mut self) -> ProtocolResult<()> {
        if self.outcome.is_some() {
            return Ok(());
        }
        let mut synth = self.stream.fork(b"SIMULATE");
        let mut failures = 0usize;
        for _ in 0..self.queries {
            let index = self.stream.challenge_usize(self.instance.step_count())?;
            let opening = StepOpening {
                current: Felt::new(synth.next_u64()),
                next: Felt::new(synth.next_u64()),
            };
            if !self.check_opening(index, &opening) {
                failures += 1;
            }
            self.round += 1;
            self.rounds_completed += 1;
        }
        self.outcome = Some(failures == 0);
        Ok(())
    }
}

/// Suite bundling parameters, instance and witness into a gate factory.
#[derive(Debug, Clone)]
pub struct LfsrSuite {
    params: ProtocolParams,
    instance: LfsrInstance,
    witness: LfsrWitness,
}

impl LfsrSuite {
    /// Creates a suite from explicit parts.
    pub fn new(params: ProtocolParams, instance: LfsrInstance, witness: LfsrWitness) -> Self {
        Self {
            params,
            instance,
            witness,
        }
    }

    /// Creates a suite whose instance and witness are honestly derived.
    pub fn honest(params: ProtocolParams, seed: Felt, length: usize) -> ProtocolResult<Self> {
        let instance = LfsrInstance::honest(seed, length)?;
        let witness = LfsrWitness::generate(&instance);
        Ok(Self::new(params, instance, witness))
    }

    /// Returns the suite's instance.
    pub fn instance(&self) -> &LfsrInstance {
        &self.instance
    }
}

impl ProtocolSuite for LfsrSuite {
    type Message = LfsrMessage;
    type Prover = LfsrProver;
    type Verifier = LfsrVerifier;

    fn prover(&self) -> Self::Prover {
        LfsrProver::new(self.witness.clone())
    }

    fn verifier(&self) -> Self::Verifier {
        LfsrVerifier::new(self.instance.clone(), &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honest_witness_ends_at_instance_output() {
        let instance = LfsrInstance::honest(Felt::new(3), 16).expect("valid length");
        let witness = LfsrWitness::generate(&instance);
        assert_eq!(witness.trace().len(), 16);
        assert_eq!(witness.trace()[0], instance.seed);
        assert_eq!(*witness.trace().last().expect("non-empty"), instance.output);
    }

    #[test]
    fn instances_bind_distinct_digests() {
        let a = LfsrInstance::honest(Felt::new(3), 16).expect("valid length");
        let b = LfsrInstance::honest(Felt::new(4), 16).expect("valid length");
        assert_ne!(a.binding_digest(), b.binding_digest());
    }

    #[test]
    fn short_traces_are_rejected_at_construction() {
        let err = LfsrInstance::new(Felt::new(0), 1, Felt::new(0)).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidInstance { .. }));
    }

    #[test]
    fn transition_matches_manual_arithmetic() {
        let state = Felt::new(11);
        assert_eq!(transition(state).value(), 5 * 11 + 7);
    }
}
