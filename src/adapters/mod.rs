//! Adapters connecting the domain ports to external systems.

pub mod plugins;
