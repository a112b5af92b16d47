//! Content-type driven construction of [`ObjectPatch`] values.

use super::ObjectPatch;
use serde_json::Value as JsonValue;
use std::fmt;
use thiserror::Error;

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_JSON_PATCH: &str = "application/json-patch+json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchFormat {
    /// `application/json-patch+json`, an RFC 6902 operation array.
    JsonPatch,
    /// `application/json`, a partial object merged onto the target.
    PartialJson,
}

#[derive(Debug, Error)]
#[error("Malformed {format} body: {source}")]
pub struct BodyParseError {
    pub format: PatchFormat,
    #[source]
    pub source: serde_json::Error,
}

impl PatchFormat {
    /// Picks the format for a `Content-Type` value, ignoring parameters and case.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            APPLICATION_JSON_PATCH => Some(PatchFormat::JsonPatch),
            APPLICATION_JSON => Some(PatchFormat::PartialJson),
            _ => None,
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            PatchFormat::JsonPatch => APPLICATION_JSON_PATCH,
            PatchFormat::PartialJson => APPLICATION_JSON,
        }
    }

    /// Parses a fully buffered body into the strategy this format selects.
    pub fn parse(self, body: &[u8]) -> Result<ObjectPatch, BodyParseError> {
        let into_error = |source| BodyParseError {
            format: self,
            source,
        };

        match self {
            PatchFormat::JsonPatch => serde_json::from_slice::<json_patch::Patch>(body)
                .map(ObjectPatch::JsonPatch)
                .map_err(into_error),
            PatchFormat::PartialJson => serde_json::from_slice::<JsonValue>(body)
                .map(ObjectPatch::PartialJson)
                .map_err(into_error),
        }
    }
}

impl fmt::Display for PatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}

#[cfg(test)]
#[path = "negotiation_tests.rs"]
mod tests;
