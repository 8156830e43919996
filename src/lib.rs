// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod activity;
    pub mod ports;
    pub mod work_order;
}

pub mod application {
    pub mod context;
    pub mod errors;
    pub mod queries;
    pub mod store;
    pub mod ticker;
}
