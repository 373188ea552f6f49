use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A completed questionnaire: question id -> selected option value.
///
/// Supplied whole for each scoring call and never mutated afterwards.
/// Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<String, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object of question id -> option value.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The stored value for `question_id`, or `""` when the question was not answered.
    pub fn resolve(&self, question_id: &str) -> &str {
        self.0.get(question_id).map(String::as_str).unwrap_or("")
    }

    /// True when the question carries a non-blank value.
    pub fn is_answered(&self, question_id: &str) -> bool {
        !self.resolve(question_id).trim().is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for AnswerSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for AnswerSet {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for AnswerSet {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}
