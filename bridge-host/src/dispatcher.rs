//! Serialized callback delivery on a dedicated thread.

use std::sync::mpsc::{self, Sender};
use std::sync::Mutex;
use std::thread::JoinHandle;

use bridge_traits::dispatch::{DispatchTask, HostDispatcher};
use tracing::debug;

/// Name given to the callback thread, visible in debuggers and thread dumps.
pub const CALLBACK_THREAD_NAME: &str = "host-callback";

/// [`HostDispatcher`] backed by one long-lived thread draining a channel.
///
/// Every posted task runs on the same thread in post order, which gives
/// callers the single-threaded callback semantics a mobile main looper
/// provides. Dropping the dispatcher stops the thread after the tasks
/// already posted have run.
pub struct ChannelDispatcher {
    sender: Mutex<Option<Sender<DispatchTask>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl ChannelDispatcher {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel::<DispatchTask>();

        let worker = std::thread::Builder::new()
            .name(CALLBACK_THREAD_NAME.to_string())
            .spawn(move || {
                while let Ok(task) = receiver.recv() {
                    task();
                }
                debug!("callback thread draining complete");
            })
            .expect("failed to spawn host callback thread");

        Self {
            sender: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
        }
    }
}

impl Default for ChannelDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDispatcher for ChannelDispatcher {
    fn post(&self, task: DispatchTask) {
        let sender = self.sender.lock().unwrap();
        if let Some(sender) = sender.as_ref() {
            // Send only fails once the dispatcher is shutting down; tasks
            // posted after that point are dropped, like a dead looper.
            let _ = sender.send(task);
        }
    }
}

impl Drop for ChannelDispatcher {
    fn drop(&mut self) {
        // Closing the channel lets the worker finish outstanding tasks.
        if let Some(sender) = self.sender.lock().unwrap().take() {
            drop(sender);
        }
        if let Some(worker) = self.worker.lock().unwrap().take() {
            let _ = worker.join();
        }
    }
}
