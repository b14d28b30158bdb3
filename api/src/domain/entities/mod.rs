//! Domain entities
//!
//! Pure domain models. These are separate from the SeaORM entities in the
//! `entity` module.

pub mod user;

pub use user::{NewUser, User, UserId, DATE_FORMAT};
