//! Canonical logging macros
//!
//! Boundary operations log exactly one start event and exactly one end or
//! end_error event. Lower layers use plain `tracing::debug!`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use dictedit_core::log_op_start;
/// log_op_start!("submit_create");
/// log_op_start!("submit_create", entry_key = "status/open");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        )
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        )
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use dictedit_core::log_op_end;
/// log_op_end!("resequence", duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        )
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        )
    };
}

/// Log an operation error with its stable kind and code
///
/// Validation failures are expected user errors and are logged at `warn`;
/// everything else at `error`.
///
/// # Example
///
/// ```
/// # use dictedit_core::log_op_error;
/// # use dictedit_core::errors::DictEditError;
/// let err = DictEditError::NotFound { key: "gone".to_string() };
/// log_op_error!("submit_update", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let domain_err: $crate::errors::DictEditError = $err;
        let expected = domain_err.is_validation();
        let ex_err: $crate::errors::ExError = domain_err.into();
        if expected {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = $crate::core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = $crate::core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err.kind = ?ex_err.kind(),
                err.code = ex_err.code(),
                $($field)*
            );
        }
    }};
}
