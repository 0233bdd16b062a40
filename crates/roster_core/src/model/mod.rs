//! Employee roster domain model.
//!
//! # Responsibility
//! - Define the records and envelopes exchanged with the roster API.
//!
//! # Invariants
//! - The remote API is the source of truth; local copies are disposable.

pub mod employee;
