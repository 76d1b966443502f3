//! Response decoding.
//!
//! The model is asked for a JSON array of records. A reply is accepted only
//! as a whole: any element that lacks a required field, carries the wrong
//! JSON type, or uses a value outside an enum rejects the entire reply.
//! Unknown extra fields are ignored.

use serde::de::DeserializeOwned;

use crate::error::GenaiError;
use crate::schema::Schema;

/// A record type the model can be asked to produce.
pub trait Shape: DeserializeOwned {
    /// Name used in log lines and error context.
    const NAME: &'static str;

    /// Schema of a single element of the reply array.
    fn item_schema() -> Schema;

    /// Schema of the whole reply.
    #[must_use]
    fn response_schema() -> Schema {
        Schema::array_of(Self::item_schema())
    }
}

/// Decodes reply text into a list of `T`.
///
/// Empty or whitespace-only text yields an empty list without touching the
/// parser.
///
/// # Errors
///
/// - [`GenaiError::Deserialize`] if the text is not JSON.
/// - [`GenaiError::ShapeMismatch`] if the top level is not an array, or any
///   element does not match `T`.
pub fn decode<T: Shape>(text: &str) -> Result<Vec<T>, GenaiError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| GenaiError::Deserialize {
            context: T::NAME.to_owned(),
            source: e,
        })?;

    let serde_json::Value::Array(elements) = value else {
        return Err(GenaiError::ShapeMismatch {
            context: T::NAME.to_owned(),
            reason: format!("expected a JSON array, got {}", json_kind(&value)),
        });
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            serde_json::from_value::<T>(element).map_err(|e| GenaiError::ShapeMismatch {
                context: T::NAME.to_owned(),
                reason: format!("element {index}: {e}"),
            })
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
