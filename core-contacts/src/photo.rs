//! # Photo Retrieval Service
//!
//! Loads thumbnail or full-resolution photo bytes for a single contact.
//! Independent of the fetch coordinator: its worker pool and per-request
//! state are its own, so concurrent photo and contact-list requests cannot
//! interfere. A contact without a stored photo is a successful absence, not
//! an error.

use std::sync::Arc;

use bridge_traits::dispatch::HostDispatcher;
use bridge_traits::photos::{PhotoSize, PhotoStore};
use bytes::Bytes;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::error::{ContactsError, Result};

/// Photo service configuration.
#[derive(Debug, Clone)]
pub struct PhotoConfig {
    /// Maximum photo reads running concurrently.
    pub max_concurrent_reads: usize,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            max_concurrent_reads: 4,
        }
    }
}

/// Outcome callback for one photo request. `Ok(None)` means the contact has
/// no stored photo (or the id is unknown to the platform).
pub type PhotoCallback = Box<dyn FnOnce(Result<Option<Bytes>>) + Send + 'static>;

/// Loads contact photo bytes on a dedicated worker pool.
pub struct PhotoService {
    store: Arc<dyn PhotoStore>,
    dispatcher: Arc<dyn HostDispatcher>,
    permits: Arc<Semaphore>,
}

impl PhotoService {
    pub fn new(
        store: Arc<dyn PhotoStore>,
        dispatcher: Arc<dyn HostDispatcher>,
        config: PhotoConfig,
    ) -> Self {
        Self {
            store,
            dispatcher,
            permits: Arc::new(Semaphore::new(config.max_concurrent_reads.max(1))),
        }
    }

    /// Start one photo read.
    ///
    /// Returns immediately; the callback fires exactly once on the host
    /// dispatcher context. Must be called from within a Tokio runtime.
    pub fn load(&self, contact_id: String, size: PhotoSize, callback: PhotoCallback) {
        let store = Arc::clone(&self.store);
        let dispatcher = Arc::clone(&self.dispatcher);
        let permits = Arc::clone(&self.permits);

        tokio::spawn(async move {
            let _permit = match permits.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    dispatcher.post(Box::new(move || {
                        callback(Err(ContactsError::PhotoRead {
                            contact_id,
                            message: "worker pool shut down".to_string(),
                            cause: "semaphore closed".to_string(),
                        }))
                    }));
                    return;
                }
            };

            let id = contact_id.clone();
            let outcome =
                tokio::task::spawn_blocking(move || store.read_photo(&id, size)).await;

            let result = match outcome {
                Ok(Ok(bytes)) => {
                    debug!(
                        contact_id = %contact_id,
                        size = ?size,
                        found = bytes.is_some(),
                        "photo read complete"
                    );
                    Ok(bytes)
                }
                Ok(Err(err)) => Err(ContactsError::photo_read(&contact_id, &err)),
                Err(join_err) => Err(ContactsError::PhotoRead {
                    contact_id,
                    message: "photo read task failed".to_string(),
                    cause: join_err.to_string(),
                }),
            };

            dispatcher.post(Box::new(move || callback(result)));
        });
    }
}
