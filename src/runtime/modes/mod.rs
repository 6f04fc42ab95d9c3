//! Execution modes
//!
//! Only the HTTP server runs long-lived; `generate-config` is handled in
//! the CLI layer without touching storage.

pub mod server;

pub use server::run_server;
