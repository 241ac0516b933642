//! SeaORM entities.

pub mod choice;
pub mod question;
