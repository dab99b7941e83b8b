//! # Tags
//!
//! Key/value resource tags and the provider-level ignore rules applied
//! before tags reach state.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Prefix reserved for tags managed by AWS itself
pub const AWS_TAG_KEY_PREFIX: &str = "aws:";

/// Tag keys and key prefixes the provider never reports
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoreTagsConfig {
    #[serde(default)]
    pub keys: BTreeSet<String>,
    #[serde(default)]
    pub key_prefixes: BTreeSet<String>,
}

impl IgnoreTagsConfig {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.key_prefixes.is_empty()
    }

    #[must_use]
    pub fn ignores(&self, key: &str) -> bool {
        self.keys.contains(key) || self.key_prefixes.iter().any(|p| key.starts_with(p.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueTags(BTreeMap<String, String>);

impl KeyValueTags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop tags whose key starts with `aws:`
    #[must_use]
    pub fn ignore_aws(self) -> Self {
        Self(
            self.0
                .into_iter()
                .filter(|(k, _)| !k.starts_with(AWS_TAG_KEY_PREFIX))
                .collect(),
        )
    }

    /// Drop tags matched by the provider ignore configuration
    #[must_use]
    pub fn ignore_config(self, config: &IgnoreTagsConfig) -> Self {
        if config.is_empty() {
            return self;
        }
        Self(self.0.into_iter().filter(|(k, _)| !config.ignores(k)).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn map(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<HashMap<String, String>> for KeyValueTags {
    fn from(tags: HashMap<String, String>) -> Self {
        Self(tags.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for KeyValueTags {
    fn from(tags: BTreeMap<String, String>) -> Self {
        Self(tags)
    }
}

impl FromIterator<(String, String)> for KeyValueTags {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
