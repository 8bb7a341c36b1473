//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Init logging → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     SIGINT received → broadcast signal → server drains and exits
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
