//! Observability: tracing subscriber setup.
//!
//! Optional for library consumers; binary hosts call [`init_tracing`] once at
//! startup.

pub mod init;

pub use init::init_tracing;
