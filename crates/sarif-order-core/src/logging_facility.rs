//! Structured logging for the services around the comparers
//!
//! Comparers stay silent; they sit on the hot path of every sort. Round-trip
//! verification, canonicalization and the conformance harness log one
//! boundary pair per call through the `log_op_*` macros, and the CLI picks
//! the output [`Profile`] at startup.
//!
//! ```rust
//! use sarif_order_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Tests swap the output for an in-memory buffer with
//! [`init_test_capture`] and assert on the captured events.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
