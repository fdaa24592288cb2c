//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (contacts provider,
//! photo store, callback dispatcher) into the contacts core and exposes the
//! remote-procedure method surface the application layer calls. Mobile hosts
//! inject their platform adapters through
//! [`CoreConfig`](core_runtime::config::CoreConfig); desktop and test hosts
//! can enable the `host-shims` feature and use [`bootstrap_host`].

pub mod error;
pub mod method;

pub use error::{CoreError, Result};
pub use method::{MethodCall, MethodReply, MethodResponder};

use std::sync::Arc;

use bridge_traits::contacts::ContactSource;
use bridge_traits::photos::PhotoSize;
use core_contacts::{ContactsFetcher, FetchConfig, PhotoConfig, PhotoService};
use core_runtime::config::CoreConfig;
use tracing::{debug, warn};

use method::names;

/// Primary façade exposed to host applications.
pub struct CoreService {
    fetcher: ContactsFetcher,
    photos: PhotoService,
}

impl CoreService {
    /// Create a new service from a validated bridge configuration.
    pub fn new(config: CoreConfig) -> Self {
        Self::with_configs(config, FetchConfig::default(), PhotoConfig::default())
    }

    /// Create a new service with explicit worker pool configuration.
    pub fn with_configs(
        config: CoreConfig,
        fetch_config: FetchConfig,
        photo_config: PhotoConfig,
    ) -> Self {
        let fetcher = ContactsFetcher::new(
            Arc::clone(&config.contact_store),
            Arc::clone(&config.dispatcher),
            fetch_config,
        );
        let photos = PhotoService::new(
            Arc::clone(&config.photo_store),
            Arc::clone(&config.dispatcher),
            photo_config,
        );
        Self { fetcher, photos }
    }

    /// Dispatch one method invocation from the remote-procedure transport.
    ///
    /// Returns immediately; the responder fires exactly once. Replies for
    /// `getContacts` and `getContactImage` arrive on the host dispatcher
    /// context. Must be called from within a Tokio runtime.
    pub fn handle_method(&self, call: MethodCall, responder: Box<dyn MethodResponder>) {
        debug!(method = %call.method, "method call received");

        match call.method.as_str() {
            names::GET_CONTACTS => self.get_contacts(responder),
            names::GET_CONTACT_IMAGE => self.get_contact_image(&call, responder),
            other => {
                warn!(method = other, "unknown method");
                responder.not_implemented();
            }
        }
    }

    fn get_contacts(&self, responder: Box<dyn MethodResponder>) {
        self.fetcher.fetch(
            &[ContactSource::Phones, ContactSource::Emails],
            Box::new(move |outcome| match outcome {
                Ok(contacts) => match serde_json::to_value(&contacts) {
                    Ok(value) => responder.success(MethodReply::Json(value)),
                    Err(err) => {
                        responder.error("", "failed to encode contacts", &err.to_string())
                    }
                },
                Err(err) => {
                    let message = err.to_string();
                    responder.error("", &message, err.cause());
                }
            }),
        );
    }

    fn get_contact_image(&self, call: &MethodCall, responder: Box<dyn MethodResponder>) {
        let Some(id) = call.string_arg("id") else {
            responder.error("", "missing argument: id", "getContactImage requires an id");
            return;
        };
        let size = PhotoSize::from_wire(call.string_arg("size").unwrap_or(""));

        self.photos.load(
            id.to_string(),
            size,
            Box::new(move |outcome| match outcome {
                Ok(Some(bytes)) => responder.success(MethodReply::Bytes(bytes)),
                Ok(None) => responder.success(MethodReply::None),
                Err(err) => {
                    let message = err.to_string();
                    responder.error("", &message, err.cause());
                }
            }),
        );
    }
}

/// Convenience bootstrapper for hosts without platform adapters.
///
/// Wires an [`InMemoryContactStore`](bridge_host::InMemoryContactStore), an
/// [`FsPhotoStore`](bridge_host::FsPhotoStore) rooted at `photo_dir`, and a
/// [`ChannelDispatcher`](bridge_host::ChannelDispatcher). The contact store
/// handle is returned alongside the service so the host can seed rows.
#[cfg(feature = "host-shims")]
pub fn bootstrap_host(
    photo_dir: impl Into<std::path::PathBuf>,
) -> Result<(CoreService, Arc<bridge_host::InMemoryContactStore>)> {
    let contact_store = Arc::new(bridge_host::InMemoryContactStore::new());

    let config = CoreConfig::builder()
        .contact_store(Arc::clone(&contact_store) as Arc<dyn bridge_traits::ContactStore>)
        .photo_store(Arc::new(bridge_host::FsPhotoStore::new(photo_dir)))
        .dispatcher(Arc::new(bridge_host::ChannelDispatcher::new()))
        .build()
        .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;

    Ok((CoreService::new(config), contact_store))
}
