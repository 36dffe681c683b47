//! Operation boundary macros
//!
//! A public operation logs exactly one `start` event and then either one
//! `end` or one `end_error` event. Each event carries the calling module as
//! `component` plus the operation name; extra `key = value` fields follow
//! the usual `tracing` field syntax.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:ident $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $crate::__schema::$event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use sarif_order_core::log_op_start;
/// log_op_start!("canonicalize");
/// log_op_start!("conformance_run", suite = "eslint");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation with its duration
///
/// # Example
///
/// ```
/// # use sarif_order_core::log_op_end;
/// log_op_end!("canonicalize", duration_ms = 3);
/// log_op_end!("canonical_digest", duration_ms = 1, digest = "ab12");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log the failed end of an operation
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// its kind and stable code are recorded as `err.kind` and `err.code`.
///
/// # Example
///
/// ```
/// # use sarif_order_core::{log_op_error, errors::SarifOrderError};
/// let err = SarifOrderError::InvalidInput { reason: "no cases".to_string() };
/// log_op_error!("conformance_run", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
