use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by a dispatch
///
/// `InvalidAction` and `MalformedPayload` come from
/// [`Store::dispatch_value`](crate::Store::dispatch_value) and abort before the
/// reducer runs. `ReducerPanicked` is only handed to middleware: the panic
/// itself keeps unwinding to the caller. In every case the stored state is
/// left untouched.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Invalid action: {reason}")]
    InvalidAction { reason: String },

    #[error("Malformed payload for action `{kind}`: {source}")]
    MalformedPayload {
        kind: String,
        #[source]
        source: Arc<serde_json::Error>,
    },

    #[error("Reducer panicked on `{kind}`: {message}")]
    ReducerPanicked { kind: String, message: String },
}

impl StoreError {
    pub(crate) fn invalid_action(reason: impl Into<String>) -> Self {
        Self::InvalidAction {
            reason: reason.into(),
        }
    }
}
