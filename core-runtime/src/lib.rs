//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the contacts platform core:
//! - Logging and tracing setup, with optional forwarding to a host
//!   [`LoggerSink`](bridge_traits::logging::LoggerSink)
//! - Fail-fast configuration holding the bridge capabilities the core needs
//!
//! Other workspace crates depend on the conventions established here: every
//! crate logs through `tracing`, and every required bridge is validated at
//! startup rather than at first use.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{Error, Result};
