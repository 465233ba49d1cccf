//! Record identifiers shared by every store.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier assigned by a store's counter.
///
/// Serialized as a decimal string (`"4"`), ordered numerically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(into = "String", try_from = "String")]
#[schema(value_type = String, example = "4")]
pub struct RecordId(u64);

impl RecordId {
    /// Creates a RecordId from a raw counter value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the counter value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for RecordId {
    type Error = std::num::ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Anything a store can hold: an immutable value with an assigned id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> RecordId;
}
