//! Shared plumbing for the API records workspace: logging setup, runtime
//! environment checks and small wire types used by more than one crate.

pub mod types;
pub mod utils;
pub mod env;
