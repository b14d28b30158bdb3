//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks instead of mockall: the repository trait is small and the
//! in-memory version doubles as a working store for router tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
