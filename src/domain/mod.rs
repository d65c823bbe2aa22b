//! Domain types and DTOs
//!
//! Request and report shapes for the estimate endpoint.

pub mod estimates;
pub mod json_number;

pub use estimates::*;
