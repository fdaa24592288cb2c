//! # Core Configuration Module
//!
//! Builder for the bridge capabilities the contacts core requires from its
//! host. Validation is fail-fast: a missing required bridge produces a
//! descriptive [`Error::CapabilityMissing`] at build time instead of a panic
//! at first use.
//!
//! ## Required Dependencies
//!
//! - `ContactStore` - provider row access for contact sources
//! - `PhotoStore` - photo byte access per contact
//! - `HostDispatcher` - serialized result delivery context
//!
//! ## Optional Dependencies
//!
//! - `LoggerSink` - mirror core logs into the host logging pipeline
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .contact_store(Arc::new(MyContactStore))
//!     .photo_store(Arc::new(MyPhotoStore))
//!     .dispatcher(Arc::new(MyMainLooperDispatcher))
//!     .build()?;
//! # Ok::<(), core_runtime::Error>(())
//! ```

use std::sync::Arc;

use bridge_traits::{
    contacts::ContactStore, dispatch::HostDispatcher, logging::LoggerSink, photos::PhotoStore,
};

use crate::error::{Error, Result};

/// Validated bundle of bridge handles the core runs against.
pub struct CoreConfig {
    pub contact_store: Arc<dyn ContactStore>,
    pub photo_store: Arc<dyn PhotoStore>,
    pub dispatcher: Arc<dyn HostDispatcher>,
    pub logger_sink: Option<Arc<dyn LoggerSink>>,
}

impl CoreConfig {
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("logger_sink", &self.logger_sink.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`CoreConfig`] with fail-fast validation.
#[derive(Default)]
pub struct CoreConfigBuilder {
    contact_store: Option<Arc<dyn ContactStore>>,
    photo_store: Option<Arc<dyn PhotoStore>>,
    dispatcher: Option<Arc<dyn HostDispatcher>>,
    logger_sink: Option<Arc<dyn LoggerSink>>,
}

impl CoreConfigBuilder {
    pub fn contact_store(mut self, store: Arc<dyn ContactStore>) -> Self {
        self.contact_store = Some(store);
        self
    }

    pub fn photo_store(mut self, store: Arc<dyn PhotoStore>) -> Self {
        self.photo_store = Some(store);
        self
    }

    pub fn dispatcher(mut self, dispatcher: Arc<dyn HostDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logger_sink = Some(sink);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityMissing`] naming the first required bridge
    /// that was not provided.
    pub fn build(self) -> Result<CoreConfig> {
        let contact_store = self.contact_store.ok_or_else(|| Error::CapabilityMissing {
            capability: "ContactStore".to_string(),
            message: "No contacts provider implementation supplied. \
                      Mobile hosts must inject their platform adapter; \
                      desktop/test hosts can use bridge-host::InMemoryContactStore."
                .to_string(),
        })?;

        let photo_store = self.photo_store.ok_or_else(|| Error::CapabilityMissing {
            capability: "PhotoStore".to_string(),
            message: "No photo store implementation supplied. \
                      Mobile hosts must inject their platform adapter; \
                      desktop/test hosts can use bridge-host::FsPhotoStore."
                .to_string(),
        })?;

        let dispatcher = self.dispatcher.ok_or_else(|| Error::CapabilityMissing {
            capability: "HostDispatcher".to_string(),
            message: "No callback dispatcher supplied. Results must be delivered \
                      on one fixed host context; use the host main looper or \
                      bridge-host::ChannelDispatcher."
                .to_string(),
        })?;

        Ok(CoreConfig {
            contact_store,
            photo_store,
            dispatcher,
            logger_sink: self.logger_sink,
        })
    }
}
