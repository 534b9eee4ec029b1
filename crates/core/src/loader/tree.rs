//! The result of a successful load.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Nested values mirroring the schema's shape: groups become objects,
/// leaves their parsed values (`null` for unset optional leaves without
/// a default).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigTree(Map<String, Value>);

impl ConfigTree {
    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Look up a value by structural path.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.0.get(first.as_ref())?;
        for segment in rest {
            current = current.as_object()?.get(segment.as_ref())?;
        }
        Some(current)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Convert into a caller-defined typed configuration struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }
}

impl From<ConfigTree> for Value {
    fn from(tree: ConfigTree) -> Self {
        tree.into_value()
    }
}
