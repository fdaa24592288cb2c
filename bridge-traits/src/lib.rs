//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the contacts core and the
//! platform-specific integration layer. Each trait represents a capability the
//! core requires but that only the host operating system can provide:
//!
//! - [`ContactStore`](contacts::ContactStore) - Row queries against the
//!   platform contacts provider, one data category at a time
//! - [`PhotoStore`](photos::PhotoStore) - Contact photo lookup by id and size
//! - [`HostDispatcher`](dispatch::HostDispatcher) - Serialized delivery of
//!   result callbacks onto the host's main sequencing context
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host
//!   logging (Logcat, OSLog, console)
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Platform
//! implementations convert their native failures (cursor errors, file
//! descriptor errors) into `BridgeError` with an actionable message; the core
//! collapses everything into its single read-failure channel.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync`. Store reads are synchronous and
//! may block; the core always invokes them from a blocking-capable worker,
//! never from an async executor thread.

pub mod contacts;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod photos;

pub use error::BridgeError;

// Re-export commonly used types
pub use contacts::{ContactRow, ContactSource, ContactStore};
pub use dispatch::{DispatchTask, HostDispatcher, InlineDispatcher};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use photos::{PhotoSize, PhotoStore};
