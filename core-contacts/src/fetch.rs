//! # Multi-Source Fetch Coordinator
//!
//! Runs one blocking provider read per requested source on a bounded worker
//! pool and delivers exactly one outcome per request: the merged snapshot
//! once every source has reported, or the first error.
//!
//! ## Session lifecycle
//!
//! Each `fetch` call creates one [`FetchSession`]: the requested sources, the
//! partial results received so far, and two latches. Worker tasks race to
//! record results; the completion check runs after every recording. Delivery
//! always happens through the host dispatcher, never on the worker thread
//! that computed the last result, and the session is dropped once its single
//! callback has fired.
//!
//! ## Outcome guarantee
//!
//! The `delivered` latch is a compare-and-set gate shared by the success and
//! error paths, so exactly one terminal outcome is delivered regardless of
//! source count, scheduling order, or how many tasks fail after the first
//! error. Late results for a settled session are discarded silently (errors
//! with a log line, successes without).
//!
//! ## Usage
//!
//! ```ignore
//! use core_contacts::fetch::ContactsFetcher;
//! use bridge_traits::contacts::ContactSource;
//!
//! fetcher.fetch(
//!     &[ContactSource::Phones, ContactSource::Emails],
//!     Box::new(|outcome| match outcome {
//!         Ok(contacts) => println!("{} contacts", contacts.len()),
//!         Err(err) => eprintln!("fetch failed: {err}"),
//!     }),
//! );
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use bridge_traits::contacts::{ContactSource, ContactStore};
use bridge_traits::dispatch::HostDispatcher;
use tokio::sync::Semaphore;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{ContactsError, Result};
use crate::merge::merge_partials;
use crate::model::Contact;
use crate::source::read_source;

/// Fetch coordinator configuration.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Maximum provider reads running concurrently. Task count per request
    /// equals source count (at most three today), so a small pool suffices.
    pub max_concurrent_reads: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_reads: 4,
        }
    }
}

/// Terminal-outcome callback for one fetch request.
pub type FetchCallback = Box<dyn FnOnce(Result<Vec<Contact>>) + Send + 'static>;

/// Coordinates concurrent source reads for contact-list requests.
///
/// Cheap to clone-share via `Arc`; requests never share session state, only
/// the store handle and the worker pool.
pub struct ContactsFetcher {
    store: Arc<dyn ContactStore>,
    dispatcher: Arc<dyn HostDispatcher>,
    permits: Arc<Semaphore>,
}

impl ContactsFetcher {
    pub fn new(
        store: Arc<dyn ContactStore>,
        dispatcher: Arc<dyn HostDispatcher>,
        config: FetchConfig,
    ) -> Self {
        Self {
            store,
            dispatcher,
            permits: Arc::new(Semaphore::new(config.max_concurrent_reads.max(1))),
        }
    }

    /// Start one aggregate fetch across `sources`.
    ///
    /// Returns immediately; the callback fires exactly once on the host
    /// dispatcher context with either the merged snapshot or the first
    /// error. Duplicate sources are collapsed, preserving first occurrence
    /// order. An empty source list yields an empty snapshot.
    ///
    /// Must be called from within a Tokio runtime; the blocking provider
    /// reads are handed to the runtime's blocking pool.
    pub fn fetch(&self, sources: &[ContactSource], callback: FetchCallback) {
        let mut distinct: Vec<ContactSource> = Vec::with_capacity(sources.len());
        for source in sources {
            if !distinct.contains(source) {
                distinct.push(*source);
            }
        }

        let session = Arc::new(FetchSession::new(
            distinct.clone(),
            Arc::clone(&self.dispatcher),
            callback,
        ));
        debug!(fetch_id = %session.id, sources = distinct.len(), "contacts fetch started");

        if distinct.is_empty() {
            session.settle(Ok(Vec::new()));
            return;
        }

        for source in distinct {
            let store = Arc::clone(&self.store);
            let permits = Arc::clone(&self.permits);
            let session = Arc::clone(&session);

            tokio::spawn(async move {
                let _permit = match permits.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        session.record_error(ContactsError::SourceRead {
                            source,
                            message: "worker pool shut down".to_string(),
                            cause: "semaphore closed".to_string(),
                        });
                        return;
                    }
                };

                let outcome =
                    tokio::task::spawn_blocking(move || read_source(store.as_ref(), source)).await;

                match outcome {
                    Ok(Ok(partial)) => session.record_result(source, partial),
                    Ok(Err(err)) => session.record_error(err),
                    Err(join_err) => session.record_error(ContactsError::SourceRead {
                        source,
                        message: "source read task failed".to_string(),
                        cause: join_err.to_string(),
                    }),
                }
            });
        }
    }
}

/// Ephemeral coordination state for one aggregate request.
struct FetchSession {
    id: Uuid,
    /// Requested sources, in merge order.
    sources: Vec<ContactSource>,
    /// Partial results recorded so far, keyed by source.
    results: Mutex<HashMap<ContactSource, HashMap<String, Contact>>>,
    /// Latched once the first error has claimed the outcome.
    error_signalled: AtomicBool,
    /// Single compare-and-set gate shared by the success and error paths.
    delivered: AtomicBool,
    callback: Mutex<Option<FetchCallback>>,
    dispatcher: Arc<dyn HostDispatcher>,
}

impl FetchSession {
    fn new(
        sources: Vec<ContactSource>,
        dispatcher: Arc<dyn HostDispatcher>,
        callback: FetchCallback,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sources,
            results: Mutex::new(HashMap::new()),
            error_signalled: AtomicBool::new(false),
            delivered: AtomicBool::new(false),
            callback: Mutex::new(Some(callback)),
            dispatcher,
        }
    }

    /// Record one source's partial result and deliver the merge if this was
    /// the last outstanding source.
    fn record_result(&self, source: ContactSource, partial: HashMap<String, Contact>) {
        let complete = {
            let mut results = self.results.lock().unwrap();
            results.insert(source, partial);
            results.len() == self.sources.len()
        };
        debug!(fetch_id = %self.id, source = %source, complete, "source result recorded");

        if complete && !self.error_signalled.load(Ordering::SeqCst) {
            let merged = {
                let results = self.results.lock().unwrap();
                let partials: Vec<_> = self
                    .sources
                    .iter()
                    .filter_map(|s| results.get(s).cloned())
                    .collect();
                merge_partials(&partials)
            };
            self.settle(Ok(merged.into_values().collect()));
        }
    }

    /// Latch the first error and deliver it; later errors are discarded.
    fn record_error(&self, err: ContactsError) {
        if self
            .error_signalled
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            self.settle(Err(err));
        } else {
            warn!(fetch_id = %self.id, error = %err, "discarding error for settled fetch");
        }
    }

    /// Deliver the terminal outcome through the dispatcher, at most once.
    fn settle(&self, outcome: Result<Vec<Contact>>) {
        if self
            .delivered
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        // The delivered latch guarantees the callback is still present here.
        if let Some(callback) = self.callback.lock().unwrap().take() {
            debug!(fetch_id = %self.id, ok = outcome.is_ok(), "delivering fetch outcome");
            self.dispatcher.post(Box::new(move || callback(outcome)));
        }
    }
}
