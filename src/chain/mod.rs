//! # Chain integrity layer
//!
//! ```text
//! chain
//! ├── types    — [`Block`] / [`Chain`] models and the [`BlockAccess`] /
//! │              [`ChainAccess`] storage seams
//! └── verifier — [`ChainVerifier`]: gate-then-signature block checks,
//!                linkage-checked chain walks, gated signing facade
//! ```
//!
//! A chain is valid only if the protocol-validity gate passes, every block's
//! signature verifies over its claimed hash, and every block past the
//! genesis links to the actual hash of its predecessor.

mod types;
mod verifier;

pub use types::{Block, BlockAccess, Chain, ChainAccess};
pub use verifier::ChainVerifier;
