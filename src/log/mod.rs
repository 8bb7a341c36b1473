//! Access log data model.
//!
//! # Data Flow
//! ```text
//! interceptor captures call metadata + payload
//!     → record.rs (immutable RequestRecord / ResponseRecord snapshot)
//!     → format.rs (pure formatter: record → line)
//!     → tracing sink ("request_log" / "response_log" targets)
//! ```
//!
//! # Design Decisions
//! - Records are fully populated before formatting; no partial records
//! - Formatters are pure functions chosen once at interceptor construction
//! - Missing optional fields render as the "-" sentinel, never as errors

pub mod format;
pub mod record;

pub use format::{
    default_request_format, default_response_format, RequestFormatter, ResponseFormatter,
};
pub use record::{protocol_name, RequestRecord, ResponseRecord, UNKNOWN_FIELD};
