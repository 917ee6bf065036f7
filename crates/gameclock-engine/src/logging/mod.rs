//! Logging utilities.
//!
//! Centralizes logger initialization behind the `log` facade. The library
//! itself only emits records; binaries and tests decide whether to install
//! `env_logger` through [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
