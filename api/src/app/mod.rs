//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod user_service;
pub mod validation;

pub use user_service::{AgedUser, PageRequest, UserService};
