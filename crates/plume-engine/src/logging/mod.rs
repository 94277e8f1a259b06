//! Logger initialization for binaries and hosts.
//!
//! The engine itself only speaks the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
