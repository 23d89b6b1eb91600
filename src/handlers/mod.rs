//! HTTP handlers for the restaurant endpoints.

pub mod restaurant;
pub use restaurant::*;
