// Periodic tick task with an explicit start/stop lifecycle.
//
// Purpose
// - Drive the store's live recomputation of running orders on a fixed
//   interval, with deterministic teardown instead of an implicit timer tied
//   to some UI lifetime.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tokio::time;
use tracing::debug;

use crate::application::store::WorkOrderStore;

#[derive(Default)]
pub struct Ticker {
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the tick loop using the store's configured interval. Starting
    /// again replaces a still-running loop.
    pub fn start(&self, store: Arc<WorkOrderStore>) {
        let interval = store.config().tick_interval;
        let task = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            // The immediate first tick of tokio's interval is harmless here.
            loop {
                ticker.tick().await;
                store.tick().await;
            }
        });
        if let Some(previous) = self.handle.lock().expect("ticker lock poisoned").replace(task) {
            debug!("replacing running ticker");
            previous.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .lock()
            .expect("ticker lock poisoned")
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    pub fn stop(&self) {
        if let Some(task) = self.handle.lock().expect("ticker lock poisoned").take() {
            task.abort();
            debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
