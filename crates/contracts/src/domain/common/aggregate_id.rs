use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
///
/// Identifiers are issued by the backend and treated as opaque tokens on the
/// client, so the only parse failure is an empty value.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id into its wire form
    fn as_string(&self) -> String;

    /// Build an id from its wire form
    fn from_string(s: &str) -> Result<Self, String>;
}
