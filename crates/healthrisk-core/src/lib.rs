//! healthrisk-core
//!
//! Pure domain types shared by the scoring engine and its callers.
//! No I/O. This is the shared vocabulary of the healthrisk system.

pub mod answers;
pub mod error;
pub mod models;
