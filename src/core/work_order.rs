// This module groups work order domain components.
//
// Structure
// - state.rs: canonical order record and lifecycle status
// - transitions.rs: pure start/stop/tick transitions over that record
//
// Boundaries
// - No input or output here. The application store owns persistence-in-memory
//   and wiring; this module only knows how a single order changes shape.

pub mod state;
pub mod transitions;
