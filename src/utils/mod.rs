//! Shared helpers and resource limits.

pub mod validation;
