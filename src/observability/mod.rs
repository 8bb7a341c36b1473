//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce tracing events
//!     → logging.rs (subscriber setup, level filtering)
//!     → stdout
//!
//! The log interceptors emit on dedicated targets:
//!     "request_log"  — one line per request
//!     "response_log" — one line per response (size-gated)
//! ```

pub mod logging;
