//! Question and choice storage.

mod connections;
mod memory_repo;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory_repo::{InMemoryChoiceRepository, InMemoryQuestionRepository};

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres_repo::{PostgresChoiceRepository, PostgresQuestionRepository};
