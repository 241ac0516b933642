//! # Polls Infrastructure
//!
//! Concrete implementations of the ports defined in `polls-core`:
//! question/choice storage (PostgreSQL via SeaORM, or in-memory) and clocks.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod clock;
pub mod database;

// Re-exports - In-Memory
pub use clock::{FixedClock, SystemClock};
pub use database::{InMemoryChoiceRepository, InMemoryQuestionRepository};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{PostgresChoiceRepository, PostgresQuestionRepository};
