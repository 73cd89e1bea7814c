use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::{Issue, Outcome, Schema, SchemaError};

/// Schema backed by a serde type.
///
/// A candidate is accepted when it deserializes into `T`. Coercion comes from
/// the type's serde attributes (`#[serde(default)]`, `deserialize_with`,
/// renames, untagged enums and so on).
///
/// ## Type Parameters
///
/// - `T`: The coerced output type. Must implement [`DeserializeOwned`].
pub struct SerdeSchema<T>(PhantomData<fn() -> T>);

impl<T> SerdeSchema<T> {
    /// Creates the schema for `T`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SerdeSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SerdeSchema<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SerdeSchema<T> {}

impl<T> fmt::Debug for SerdeSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerdeSchema<{}>", std::any::type_name::<T>())
    }
}

impl<T: DeserializeOwned + Send> Schema for SerdeSchema<T> {
    type Output = T;

    async fn validate(&self, candidate: &Value) -> Result<Outcome<T>, SchemaError> {
        Ok(match T::deserialize(candidate) {
            Ok(value) => Outcome::Accepted(value),
            Err(e) => Outcome::Rejected(vec![Issue::new(e.to_string())]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Item {
        #[serde(deserialize_with = "number_from_string")]
        count: u32,
        #[serde(default)]
        tags: Vec<String>,
    }

    fn number_from_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }

    #[tokio::test]
    async fn test_coerces_through_serde_attributes() {
        let outcome = SerdeSchema::<Item>::new()
            .validate(&json!({"count": "12"}))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Accepted(Item {
                count: 12,
                tags: Vec::new()
            })
        );
    }

    #[tokio::test]
    async fn test_rejects_wrong_shape() {
        let outcome = SerdeSchema::<Item>::new()
            .validate(&json!({"count": 12}))
            .await
            .unwrap();
        let Outcome::Rejected(issues) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("string"));
    }

    #[test]
    fn test_debug_names_type() {
        let schema = SerdeSchema::<Item>::new();
        assert!(format!("{schema:?}").contains("Item"));
    }
}
