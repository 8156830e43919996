// EngineContext wires the store to its consumers.
//
// Purpose
// - Replace the original implicit reactive context with an explicit handle:
//   accessors invoked before `init` fail fast instead of silently handing
//   out defaults, which would mask a wiring bug.

use std::sync::{Arc, OnceLock};

use crate::application::errors::ContextError;
use crate::application::store::WorkOrderStore;

#[derive(Default)]
pub struct EngineContext {
    store: OnceLock<Arc<WorkOrderStore>>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&self, store: Arc<WorkOrderStore>) -> Result<(), ContextError> {
        self.store
            .set(store)
            .map_err(|_| ContextError::AlreadyInitialized)
    }

    pub fn store(&self) -> Result<Arc<WorkOrderStore>, ContextError> {
        self.store
            .get()
            .cloned()
            .ok_or(ContextError::NotInitialized)
    }
}
