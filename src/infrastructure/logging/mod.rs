//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Console output on stderr (stdout carries the loaded records)
//! - Optional rotated JSON log files
//! - Secret scrubbing for text that may carry credentials

pub mod config;
pub mod logger;
pub mod secret_scrubbing;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::{parse_log_level, LoggerImpl};
pub use secret_scrubbing::SecretScrubber;
