//! Domain layer: records, configuration model, errors and ports.

pub mod errors;
pub mod models;
pub mod ports;
