//! Patch strategies applied to typed records.
//!
//! A request body is turned into an [`ObjectPatch`] by [`negotiation::PatchFormat`]. Either
//! variant is applied the same way through [`ObjectPatch::apply`].

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

pub mod merge;
pub mod negotiation;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("Failed to apply JSON patch: {0}")]
    Operation(#[from] json_patch::PatchError),

    #[error("Failed to serialize patch target: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Patch document must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Patched document does not match the target type: {0}")]
    Merge(#[source] serde_json::Error),
}

#[derive(Clone, Debug)]
pub enum ObjectPatch {
    /// RFC 6902 operation list.
    JsonPatch(json_patch::Patch),
    /// Partial object whose present keys overwrite the target's fields.
    PartialJson(JsonValue),
}

impl ObjectPatch {
    pub fn apply<T>(&self, target: T) -> Result<T, PatchError>
    where
        T: Serialize + DeserializeOwned,
    {
        match self {
            ObjectPatch::JsonPatch(operations) => {
                let mut document = serde_json::to_value(&target).map_err(PatchError::Serialize)?;
                json_patch::patch(&mut document, operations)?;
                merge::update_in_place(target, &document)
            }
            ObjectPatch::PartialJson(partial) => merge::update_in_place(target, partial),
        }
    }
}

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;
