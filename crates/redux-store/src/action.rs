//! Action trait and the duck-typed action decoder
//!
//! Typed actions are plain enums. On the wire an action is a JSON object
//! with a `"type"` discriminator plus optional payload fields:
//!
//! ```text
//! { "type": "SET_VISIBILITY_FILTER", "filter": "SHOW_COMPLETED" }
//! ```

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;

/// Name of the discriminator field of a duck-typed action
pub const TYPE_FIELD: &str = "type";

/// A tagged description of an intended state change
pub trait Action: Debug {
    /// Discriminator of this action, e.g. `"INCREMENT"`
    fn kind(&self) -> &'static str;
}

/// Decode a duck-typed action into its typed form
///
/// Fails with [`StoreError::InvalidAction`] when the value is not an object
/// or has no string `"type"` field, and with [`StoreError::MalformedPayload`]
/// when the payload does not fit the action kind.
pub fn action_from_value<A: DeserializeOwned>(value: Value) -> Result<A, StoreError> {
    let kind = match &value {
        Value::Object(fields) => match fields.get(TYPE_FIELD) {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => {
                return Err(StoreError::invalid_action(format!(
                    "`{}` must be a string, got {}",
                    TYPE_FIELD, other
                )))
            }
            None => {
                return Err(StoreError::invalid_action(format!(
                    "missing `{}` field",
                    TYPE_FIELD
                )))
            }
        },
        other => {
            return Err(StoreError::invalid_action(format!(
                "expected a JSON object, got {}",
                other
            )))
        }
    };

    serde_json::from_value(value).map_err(|source| StoreError::MalformedPayload {
        kind,
        source: Arc::new(source),
    })
}
