//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `age`: age derivation from a date of birth
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies

pub mod age;
pub mod entities;
pub mod ports;
