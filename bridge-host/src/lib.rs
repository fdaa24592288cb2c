//! # Host Bridge Implementations
//!
//! Concrete native adapters for the bridge traits, used by desktop hosts and
//! the test suite. Mobile hosts ship their own adapters backed by the
//! platform contacts provider and photo blobs; the implementations here stand
//! in for those on hosts without one:
//!
//! - [`ChannelDispatcher`] - dedicated callback thread, the main-looper analog
//! - [`InMemoryContactStore`] - seeded provider rows for tests and demos
//! - [`FsPhotoStore`] - directory of photo files keyed by contact id

mod contacts;
mod dispatcher;
mod photos;

pub use contacts::InMemoryContactStore;
pub use dispatcher::{ChannelDispatcher, CALLBACK_THREAD_NAME};
pub use photos::FsPhotoStore;
