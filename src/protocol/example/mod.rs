//! Worked example protocols exercising the runtime end to end.

pub mod lfsr;

pub use lfsr::{
    LfsrInstance, LfsrMessage, LfsrProver, LfsrSuite, LfsrVerifier, LfsrWitness,
};
