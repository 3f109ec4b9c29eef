//! Authentication primitives.
//!
//! - [`jwt`] -- bearer-token validation.

pub mod jwt;
