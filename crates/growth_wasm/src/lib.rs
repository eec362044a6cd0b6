//! WASM bindings for the growth simulation core.
//!
//! The runner hands out samples in batches so the front end decides how far to pull.

mod runner;

pub use runner::WasmSimulationRunner;
