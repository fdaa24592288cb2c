//! # Contacts Aggregation Core
//!
//! Queries the platform contacts provider one source at a time, merges rows
//! that belong to the same contact, and retrieves contact photos on demand.
//!
//! ## Overview
//!
//! Two cooperating pieces make up the aggregator:
//!
//! - [`ContactsFetcher`](fetch::ContactsFetcher) - runs one blocking read per
//!   requested [`ContactSource`](bridge_traits::contacts::ContactSource) on a
//!   bounded worker pool and delivers exactly one outcome (merged snapshot or
//!   first error) per request
//! - [`merge_partials`](merge::merge_partials) - unions the per-source
//!   partial records into one map keyed by contact id
//!
//! A third, independent capability, [`PhotoService`](photo::PhotoService),
//! loads thumbnail or full-resolution photo bytes for a single contact on its
//! own worker pool.
//!
//! All results are handed back through the host's
//! [`HostDispatcher`](bridge_traits::dispatch::HostDispatcher), so callers
//! observe single-threaded callback semantics even though reads run in
//! parallel.

pub mod error;
pub mod fetch;
pub mod merge;
pub mod model;
pub mod photo;
pub mod source;

pub use error::{ContactsError, Result};
pub use fetch::{ContactsFetcher, FetchCallback, FetchConfig};
pub use merge::merge_partials;
pub use model::Contact;
pub use photo::{PhotoCallback, PhotoConfig, PhotoService};
