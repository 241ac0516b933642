//! # Polls Core
//!
//! The domain layer of the polls service.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the question and choice entities, the publication/visibility rules, and the
//! ports that storage and clocks must implement.

pub mod domain;
pub mod error;
pub mod ports;
pub mod visibility;

pub use error::DomainError;
pub use visibility::{list_visible, resolve_visible, resolve_visible_one, was_published_recently};
