//! Shared types for sarif-order facilities
//!
//! This crate holds the vocabulary shared by the error and logging
//! facilities of the ordering engine:
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   structured logging macros and the conformance harness

pub mod schema;
