//! Remote-procedure method surface.
//!
//! The transport that carries calls across the application boundary is
//! host-owned; it hands decoded calls to
//! [`CoreService::handle_method`](crate::CoreService::handle_method) together
//! with a single-use responder. Replies for long-running methods arrive on
//! the host dispatcher context, never on a worker thread.

use bytes::Bytes;
use serde_json::Value;

/// One decoded method invocation from the application layer.
#[derive(Debug, Clone)]
pub struct MethodCall {
    /// Method name, e.g. `"getContacts"`.
    pub method: String,
    /// JSON arguments; `Value::Null` for argument-less methods.
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Read a required string argument.
    pub(crate) fn string_arg(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).and_then(Value::as_str)
    }
}

/// Successful reply payload.
///
/// Binary replies (photo bytes) stay out of JSON so the transport can use
/// its native byte-buffer encoding; `None` is the explicit "no data" reply
/// used for absent photos.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodReply {
    Json(Value),
    Bytes(Bytes),
    None,
}

/// Single-use reply channel for one method invocation.
///
/// Exactly one of the three methods is called per invocation. `error`
/// carries the generic error channel: an error code (empty string for the
/// generic failure), a human-readable message, and the stringified cause as
/// details.
pub trait MethodResponder: Send {
    fn success(self: Box<Self>, reply: MethodReply);
    fn error(self: Box<Self>, code: &str, message: &str, details: &str);
    fn not_implemented(self: Box<Self>);
}

/// Method names served by the core.
pub(crate) mod names {
    pub const GET_CONTACTS: &str = "getContacts";
    pub const GET_CONTACT_IMAGE: &str = "getContactImage";
}
