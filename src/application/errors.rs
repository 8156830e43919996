// Application-level error types.
//
// Error posture
// - This engine favours documented no-ops over errors: double-start,
//   double-stop and unknown ids are absorbed by the store (and logged).
// - The exceptions are a missing engine context, which signals a wiring bug
//   and must fail fast, and a second concurrent clock-in for one technician,
//   which the store rejects structurally.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("engine context not initialized: no work order store installed")]
    NotInitialized,

    #[error("engine context already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockInError {
    #[error("technician {technician_id} already has an active clocking")]
    TechnicianAlreadyActive { technician_id: String },
}
