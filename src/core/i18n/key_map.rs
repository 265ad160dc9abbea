use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::doc::{TagError, expand_records};
use crate::core::model::DeclTree;
use crate::utils::write_file;

/// A translation: one string, or a list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslatedValue {
    Text(String),
    Lines(Vec<String>),
}

impl TranslatedValue {
    pub fn is_empty(&self) -> bool {
        match self {
            TranslatedValue::Text(text) => text.is_empty(),
            TranslatedValue::Lines(lines) => lines.is_empty(),
        }
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(TranslatedValue::Text(text.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(TranslatedValue::Lines),
            _ => None,
        }
    }

    fn into_json(self) -> Value {
        match self {
            TranslatedValue::Text(text) => Value::String(text),
            TranslatedValue::Lines(lines) => {
                Value::Array(lines.into_iter().map(Value::String).collect())
            }
        }
    }
}

impl From<&str> for TranslatedValue {
    fn from(text: &str) -> Self {
        TranslatedValue::Text(text.to_string())
    }
}

/// Flat, insertion-ordered map from dotted key to translation.
///
/// Insertion is append-only: the first value stored under a key is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyMap {
    entries: Map<String, Value>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Store `value` under `key` unless the key is already present.
    /// Returns whether the value was stored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TranslatedValue>) -> bool {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value.into().into_json());
        true
    }

    pub fn get(&self, key: &str) -> Option<TranslatedValue> {
        self.entries.get(key).and_then(TranslatedValue::from_json)
    }

    /// Copy non-empty translations from `previous` for keys this map
    /// already has. Keys only present in `previous` are dropped. Returns the
    /// number of translations carried over.
    pub fn merge_from(&mut self, previous: &KeyMap) -> usize {
        let mut carried = 0;
        for (key, slot) in self.entries.iter_mut() {
            let Some(value) = previous.get(key) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let current = TranslatedValue::from_json(slot);
            if current.as_ref().is_some_and(|v| !v.is_empty()) {
                continue;
            }
            *slot = value.into_json();
            carried += 1;
        }
        carried
    }

    /// Parse a key map, rejecting values that are neither strings nor lists
    /// of strings.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).context("Invalid key map JSON")?;
        let Value::Object(entries) = value else {
            bail!("Key map must be a JSON object of key -> translation");
        };
        for (key, value) in &entries {
            if TranslatedValue::from_json(value).is_none() {
                bail!(
                    "Translation for '{}' must be a string or an array of strings",
                    key
                );
            }
        }
        Ok(Self { entries })
    }

    /// Pretty-printed JSON with four-space indentation.
    pub fn to_json_string(&self) -> Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)
            .context("Failed to serialize key map")?;
        let mut text = String::from_utf8(out).context("Key map is not valid UTF-8")?;
        text.push('\n');
        Ok(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read key map: {:?}", path))?;
        Self::from_json_str(&content).with_context(|| format!("Failed to load key map: {:?}", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_file(path, &self.to_json_string()?)
            .with_context(|| format!("Failed to save key map: {:?}", path))
    }
}

#[derive(Debug, Default)]
pub struct KeyMapOutcome {
    pub keys: KeyMap,
    pub misplaced: Vec<TagError>,
}

/// Walk the tree depth-first, pre-order, and record every key its doc flags
/// expand to, each with an empty translation.
pub fn build_key_map(tree: &DeclTree, languages: &[String]) -> KeyMapOutcome {
    let mut outcome = KeyMapOutcome::default();
    for id in tree.walk() {
        let expansion = expand_records(tree, id, languages);
        for record in expansion.records {
            outcome.keys.insert(record.key, "");
        }
        outcome.misplaced.extend(expansion.misplaced);
    }
    outcome
}
