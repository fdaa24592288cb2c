//! Integration tests for the remote-procedure method surface.
//!
//! These drive `CoreService::handle_method` the way a transport would:
//! decoded calls in, a single-use responder out, with real host shims
//! (in-memory contact store, filesystem photo store, channel dispatcher).

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use bridge_traits::contacts::ContactSource;
use bytes::Bytes;
use core_service::{bootstrap_host, MethodCall, MethodReply, MethodResponder};
use serde_json::{json, Value};
use uuid::Uuid;

#[derive(Debug)]
enum Captured {
    Success(MethodReply),
    Error {
        code: String,
        message: String,
        details: String,
    },
    NotImplemented,
}

struct CapturingResponder {
    tx: mpsc::Sender<Captured>,
}

impl CapturingResponder {
    fn pair() -> (Box<dyn MethodResponder>, mpsc::Receiver<Captured>) {
        let (tx, rx) = mpsc::channel();
        (Box::new(CapturingResponder { tx }), rx)
    }
}

impl MethodResponder for CapturingResponder {
    fn success(self: Box<Self>, reply: MethodReply) {
        self.tx.send(Captured::Success(reply)).unwrap();
    }

    fn error(self: Box<Self>, code: &str, message: &str, details: &str) {
        self.tx
            .send(Captured::Error {
                code: code.to_string(),
                message: message.to_string(),
                details: details.to_string(),
            })
            .unwrap();
    }

    fn not_implemented(self: Box<Self>) {
        self.tx.send(Captured::NotImplemented).unwrap();
    }
}

struct TempPhotoDir(PathBuf);

impl TempPhotoDir {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("method-surface-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }
}

impl Drop for TempPhotoDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn recv(rx: &mpsc::Receiver<Captured>) -> Captured {
    rx.recv_timeout(Duration::from_secs(5)).unwrap()
}

fn contact_by_id<'a>(contacts: &'a [Value], id: &str) -> &'a Value {
    contacts
        .iter()
        .find(|c| c["id"] == id)
        .unwrap_or_else(|| panic!("no contact with id {id}"))
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_contacts_returns_merged_wire_records() {
    let photos = TempPhotoDir::new();
    let (service, store) = bootstrap_host(&photos.0).unwrap();

    store.seed_phone("1", "A", "555");
    store.seed_email("1", "", "a@x.com");
    store.seed_email("2", "B", "b@x.com");

    let (responder, rx) = CapturingResponder::pair();
    service.handle_method(MethodCall::new("getContacts", Value::Null), responder);

    let Captured::Success(MethodReply::Json(value)) = recv(&rx) else {
        panic!("expected JSON success");
    };
    let contacts = value.as_array().unwrap();
    assert_eq!(contacts.len(), 2);

    let first = contact_by_id(contacts, "1");
    assert_eq!(first["displayName"], "A");
    assert_eq!(first["phones"], json!(["555"]));
    assert_eq!(first["emails"], json!(["a@x.com"]));

    let second = contact_by_id(contacts, "2");
    assert_eq!(second["displayName"], "B");
    assert_eq!(second["phones"], json!([]));
    assert_eq!(second["emails"], json!(["b@x.com"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_contacts_source_failure_uses_generic_error_channel() {
    let photos = TempPhotoDir::new();
    let (service, store) = bootstrap_host(&photos.0).unwrap();

    store.seed_phone("1", "A", "555");
    store.fail_source(ContactSource::Emails);

    let (responder, rx) = CapturingResponder::pair();
    service.handle_method(MethodCall::new("getContacts", Value::Null), responder);

    let Captured::Error {
        code,
        message,
        details,
    } = recv(&rx)
    else {
        panic!("expected error");
    };
    assert_eq!(code, "");
    assert!(message.contains("Source read failed"));
    assert!(details.contains("injected failure"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_contact_image_thumbnail_and_full() {
    let photos = TempPhotoDir::new();
    std::fs::write(photos.0.join("7.jpg"), b"full-bytes").unwrap();
    std::fs::write(photos.0.join("7.thumb.jpg"), b"thumb-bytes").unwrap();
    let (service, _store) = bootstrap_host(&photos.0).unwrap();

    let (responder, rx) = CapturingResponder::pair();
    service.handle_method(
        MethodCall::new("getContactImage", json!({"id": "7", "size": "thumbnail"})),
        responder,
    );
    let Captured::Success(MethodReply::Bytes(bytes)) = recv(&rx) else {
        panic!("expected bytes");
    };
    assert_eq!(bytes, Bytes::from_static(b"thumb-bytes"));

    // Any size other than "thumbnail" selects the full-resolution path.
    let (responder, rx) = CapturingResponder::pair();
    service.handle_method(
        MethodCall::new("getContactImage", json!({"id": "7", "size": "fullSize"})),
        responder,
    );
    let Captured::Success(MethodReply::Bytes(bytes)) = recv(&rx) else {
        panic!("expected bytes");
    };
    assert_eq!(bytes, Bytes::from_static(b"full-bytes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_contact_image_absent_photo_is_success_none() {
    let photos = TempPhotoDir::new();
    let (service, _store) = bootstrap_host(&photos.0).unwrap();

    let (responder, rx) = CapturingResponder::pair();
    service.handle_method(
        MethodCall::new("getContactImage", json!({"id": "nobody", "size": "thumbnail"})),
        responder,
    );

    match recv(&rx) {
        Captured::Success(MethodReply::None) => {}
        other => panic!("expected success-none, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_contact_image_missing_id_is_an_error() {
    let photos = TempPhotoDir::new();
    let (service, _store) = bootstrap_host(&photos.0).unwrap();

    let (responder, rx) = CapturingResponder::pair();
    service.handle_method(
        MethodCall::new("getContactImage", json!({"size": "thumbnail"})),
        responder,
    );

    let Captured::Error { message, .. } = recv(&rx) else {
        panic!("expected error");
    };
    assert!(message.contains("missing argument: id"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_method_answers_not_implemented() {
    let photos = TempPhotoDir::new();
    let (service, _store) = bootstrap_host(&photos.0).unwrap();

    let (responder, rx) = CapturingResponder::pair();
    service.handle_method(MethodCall::new("deleteContact", Value::Null), responder);

    match recv(&rx) {
        Captured::NotImplemented => {}
        other => panic!("expected not-implemented, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_store_yields_empty_contact_list() {
    let photos = TempPhotoDir::new();
    let (service, _store) = bootstrap_host(&photos.0).unwrap();

    let (responder, rx) = CapturingResponder::pair();
    service.handle_method(MethodCall::new("getContacts", Value::Null), responder);

    let Captured::Success(MethodReply::Json(value)) = recv(&rx) else {
        panic!("expected JSON success");
    };
    assert!(value.as_array().unwrap().is_empty());
}
