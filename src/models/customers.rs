use serde::{Deserialize, Serialize};

pub type CustomerId = u64;

/// A customer record as stored and as exchanged over HTTP.
///
/// `id` stays `None` until the store assigns one on insert.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Customer {
    #[serde(default)]
    pub id: Option<CustomerId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_numbers: Option<Vec<String>>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            phone_numbers: None,
        }
    }

    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_phone_numbers<I, S>(mut self, phone_numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phone_numbers = Some(phone_numbers.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
#[path = "customers_tests.rs"]
mod tests;
