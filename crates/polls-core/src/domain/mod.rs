//! Domain entities - the core business objects.

mod choice;
mod question;

pub use choice::Choice;
pub use question::{MAX_TEXT_LEN, Question};
