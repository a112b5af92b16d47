use super::PatchError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;

/// Overlays the top-level keys of `source` onto `target` and rebuilds the typed value.
///
/// Keys missing from `source` keep the target's current value. Nested values are replaced
/// wholesale, never merged element by element.
pub fn update_in_place<T>(target: T, source: &JsonValue) -> Result<T, PatchError>
where
    T: Serialize + DeserializeOwned,
{
    let overlay = source
        .as_object()
        .ok_or_else(|| PatchError::NotAnObject(json_type_name(source)))?;

    let mut document = serde_json::to_value(&target).map_err(PatchError::Serialize)?;
    let fields = document
        .as_object_mut()
        .ok_or_else(|| PatchError::NotAnObject("non-object target"))?;

    for (key, value) in overlay {
        fields.insert(key.clone(), value.clone());
    }

    serde_json::from_value(document).map_err(PatchError::Merge)
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
