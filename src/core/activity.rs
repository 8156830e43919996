// This module groups clocking activity components.
//
// Structure
// - model.rs: the derived activity record and its clock times
// - project.rs: pure projection from the order set to a day timeline

pub mod model;
pub mod project;
