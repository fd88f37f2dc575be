//! # Scribe Shared
//!
//! Request and response types shared between the API server and any Rust
//! client of it.

pub mod dto;
pub mod response;

pub use response::{BlogResponse, ErrorBody, MessageResponse};
