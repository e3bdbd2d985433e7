mod _fixtures;

use _fixtures::{honest_suite, rejecting_suite, signing_key};

use iop_chain::chain::ChainVerifier;
use iop_chain::crypto::{Ed25519Scheme, SignatureScheme};

const PAYLOAD: &[u8] = b"ledger entry 7";

#[test]
fn sign_then_verify_round_trips() {
    let key = signing_key(21);
    let facade = ChainVerifier::new(Ed25519Scheme, honest_suite());
    let signature = facade
        .sign_data(PAYLOAD, &key)
        .expect("no structural errors")
        .expect("gate passes, signature released");
    assert!(facade
        .verify_data(PAYLOAD, &signature, &key.verifying_key())
        .expect("no structural errors"));
}

#[test]
fn gate_failure_withholds_the_signature() {
    let key = signing_key(21);
    let facade = ChainVerifier::new(Ed25519Scheme, rejecting_suite());
    let released = facade.sign_data(PAYLOAD, &key).expect("no structural errors");
    assert!(released.is_none());
}

#[test]
fn gate_failure_rejects_an_otherwise_valid_signature() {
    let key = signing_key(21);
    let signature = Ed25519Scheme.sign(PAYLOAD, &key);
    let facade = ChainVerifier::new(Ed25519Scheme, rejecting_suite());
    assert!(!facade
        .verify_data(PAYLOAD, &signature, &key.verifying_key())
        .expect("no structural errors"));
}

#[test]
fn wrong_key_rejects_without_consulting_the_gate() {
    let key = signing_key(21);
    let other = signing_key(22);
    let signature = Ed25519Scheme.sign(PAYLOAD, &key);
    let facade = ChainVerifier::new(Ed25519Scheme, honest_suite());
    assert!(!facade
        .verify_data(PAYLOAD, &signature, &other.verifying_key())
        .expect("no structural errors"));
}

#[test]
fn tampered_payload_rejects() {
    let key = signing_key(21);
    let facade = ChainVerifier::new(Ed25519Scheme, honest_suite());
    let signature = facade
        .sign_data(PAYLOAD, &key)
        .expect("no structural errors")
        .expect("gate passes, signature released");
    assert!(!facade
        .verify_data(b"ledger entry 8", &signature, &key.verifying_key())
        .expect("no structural errors"));
}
