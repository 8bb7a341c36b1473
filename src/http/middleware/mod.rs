//! HTTP middleware components.
//!
//! # Data Flow
//! ```text
//! inbound call
//!     → request_id.rs (tag with x-request-id)
//!     → request_log.rs (buffer request body, replay to downstream, log)
//!     → response_log.rs (buffer downstream's writes, log, replay to wire)
//!     → handlers
//! ```
//!
//! Both log interceptors are independent and stateless across calls; each
//! invocation owns its own buffer and timer, and the only shared state is
//! the formatter chosen at construction.

pub mod capture;
pub mod request_id;
pub mod request_log;
pub mod response_log;

pub use request_id::{RequestIdLayer, X_REQUEST_ID};
pub use request_log::{AuthenticatedUser, RequestLogLayer};
pub use response_log::{ResponseLogLayer, DEFAULT_RESPONSE_BODY_LIMIT};
