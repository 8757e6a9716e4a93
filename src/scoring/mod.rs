//! Compatibility scoring engine
//!
//! Pure and stateless: every function here reads the team, the candidate,
//! and the current roster, and returns a value without side effects.

pub mod batch;
pub mod composer;
pub mod diversity;
pub mod filter;
pub mod role;
pub mod skill;
pub mod weights;
