//! CLI command implementations.

pub mod load;
