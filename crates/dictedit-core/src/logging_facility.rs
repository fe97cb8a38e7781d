//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Boundary logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//!   used by the editing cycle; buffer internals log with `tracing::debug!`
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use dictedit_core::logging_facility::{init, Profile};
//!
//! // Initialize once at host startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
