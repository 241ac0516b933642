//! # Polls Shared
//!
//! Request/response types shared by the polls server and its clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
