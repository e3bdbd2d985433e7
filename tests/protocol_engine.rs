mod _fixtures;

use _fixtures::{honest_suite, rejecting_suite, sample_params, HONEST_SUITE, QUERY_BUDGET, TRACE_LENGTH};
use proptest::prelude::*;

use iop_chain::protocol::example::lfsr::{
    Felt, LfsrInstance, LfsrMessage, LfsrSuite, LfsrVerifier, LfsrWitness, StepQuery,
};
use iop_chain::protocol::{
    evaluate_gate, execute_protocol, execute_verifier_only, Party, ProtocolError, ProtocolSuite,
    VerifierParty,
};

#[test]
fn honest_interaction_accepts() {
    let mut prover = HONEST_SUITE.prover();
    let mut verifier = HONEST_SUITE.verifier();
    let verdict = execute_protocol(&mut prover, &mut verifier).expect("no structural errors");
    assert!(verdict);
    assert!(verifier.done_interacting());
}

#[test]
fn fully_broken_trace_rejects_under_any_seed() {
    // Every transition of the constant trace is broken, so the first spot
    // check fails no matter which index the stream samples.
    let suite = rejecting_suite();
    let verdict = evaluate_gate(&suite).expect("no structural errors");
    assert!(!verdict);
}

#[test]
fn verdict_is_idempotent_once_done() {
    let suite = honest_suite();
    let mut prover = suite.prover();
    let mut verifier = suite.verifier();
    let verdict = execute_protocol(&mut prover, &mut verifier).expect("no structural errors");
    assert_eq!(verifier.verify().expect("interaction concluded"), verdict);
    assert_eq!(verifier.verify().expect("interaction concluded"), verdict);
}

#[test]
fn verify_before_completion_is_an_error() {
    let suite = honest_suite();
    let verifier = suite.verifier();
    assert_eq!(
        verifier.verify().unwrap_err(),
        ProtocolError::IncompleteInteraction
    );
}

#[test]
fn query_sent_to_verifier_is_rejected() {
    let suite = honest_suite();
    let mut verifier = suite.verifier();
    let err = verifier
        .receive_message(LfsrMessage::Query(StepQuery { index: 0 }))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::UnexpectedMessage { .. }));
}

#[test]
fn prover_cannot_answer_without_a_query() {
    let suite = honest_suite();
    let mut prover = suite.prover();
    let err = prover.send_message().unwrap_err();
    assert!(matches!(err, ProtocolError::OutOfTurn { .. }));
}

#[test]
fn out_of_range_query_is_a_protocol_error() {
    let suite = honest_suite();
    let mut prover = suite.prover();
    let err = prover
        .receive_message(LfsrMessage::Query(StepQuery {
            index: TRACE_LENGTH as u64,
        }))
        .unwrap_err();
    assert!(matches!(err, ProtocolError::UnexpectedMessage { .. }));
}

#[test]
fn byte_estimates_are_fixed_by_execution() {
    let suite = honest_suite();
    let mut prover = suite.prover();
    let mut verifier = suite.verifier();
    let committed = verifier.expected_committed_proof_bytes();
    let sent = verifier.expected_sent_proof_bytes();
    let queried = verifier.expected_queried_data_bytes();
    assert_eq!(committed, TRACE_LENGTH * 8);
    assert_eq!(sent, QUERY_BUDGET as usize * 16);
    assert_eq!(queried, sent);

    execute_protocol(&mut prover, &mut verifier).expect("no structural errors");
    assert_eq!(verifier.expected_committed_proof_bytes(), committed);
    assert_eq!(verifier.expected_sent_proof_bytes(), sent);
    assert_eq!(verifier.expected_queried_data_bytes(), queried);
}

#[test]
fn verifier_only_simulation_concludes() {
    let suite = honest_suite();
    let mut verifier = suite.verifier();
    let _ = execute_verifier_only(&mut verifier).expect("no structural errors");
    assert!(verifier.done_interacting());
}

#[test]
fn identical_seeds_sample_identical_queries() {
    let suite = honest_suite();
    let mut first = suite.verifier();
    let mut second = suite.verifier();
    let a = first.send_message().expect("fresh verifier sends");
    let b = second.send_message().expect("fresh verifier sends");
    assert_eq!(a, b);
}

fn run_with_trace(trace: Vec<Felt>) -> bool {
    let instance = LfsrInstance::honest(Felt::new(3), TRACE_LENGTH).expect("fixture instance");
    let suite = LfsrSuite::new(
        sample_params(),
        instance,
        LfsrWitness::from_trace(trace),
    );
    evaluate_gate(&suite).expect("no structural errors")
}

#[test]
fn execution_is_deterministic_for_a_partially_corrupt_trace() {
    // A single broken transition may or may not be sampled, but two runs
    // under the same seed must agree either way.
    let instance = LfsrInstance::honest(Felt::new(3), TRACE_LENGTH).expect("fixture instance");
    let mut trace = LfsrWitness::generate(&instance).trace().to_vec();
    trace[TRACE_LENGTH / 2] = Felt::new(trace[TRACE_LENGTH / 2].value() ^ 1);
    assert_eq!(run_with_trace(trace.clone()), run_with_trace(trace));
}

proptest! {
    #[test]
    fn honest_suites_always_accept(seed_bytes in any::<[u8; 32]>(), start in any::<u64>(), length in 2usize..64) {
        let params = iop_chain::params::ProtocolParamsBuilder::new()
            .with_seed(seed_bytes)
            .with_queries(4)
            .build()
            .expect("params");
        let suite = LfsrSuite::honest(params, Felt::new(start), length).expect("instance");
        let verdict = evaluate_gate(&suite).expect("no structural errors");
        prop_assert!(verdict);
    }

    #[test]
    fn challenge_sampling_stays_in_range(seed_bytes in any::<[u8; 32]>(), length in 2usize..64) {
        let params = iop_chain::params::ProtocolParamsBuilder::new()
            .with_seed(seed_bytes)
            .with_queries(1)
            .build()
            .expect("params");
        let instance = LfsrInstance::honest(Felt::new(1), length).expect("instance");
        let mut verifier = LfsrVerifier::new(instance, &params);
        let message = verifier.send_message().expect("fresh verifier sends");
        match message {
            LfsrMessage::Query(query) => prop_assert!((query.index as usize) < length - 1),
            LfsrMessage::Opening(_) => prop_assert!(false, "verifier must open with a query"),
        }
    }
}
