use crate::{AssetStore, InferError};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::sync::Arc;

/// Class names, index-aligned with a model's score vector.
///
/// Immutable; clones share the same storage.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    labels: Arc<[String]>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelFile {
    List(Vec<String>),
    // {"0": ["n01440764", "tench"], ...}
    ClassIndex(HashMap<String, (String, String)>),
}

impl LabelTable {
    /// # Errors
    ///
    /// Returns `InferError::Labels` if `labels` is empty.
    pub fn new(labels: Vec<String>) -> Result<Self, InferError> {
        if labels.is_empty() {
            return Err(InferError::Labels("label table is empty".to_string()));
        }
        Ok(Self {
            labels: labels.into(),
        })
    }

    /// One label per line; surrounding whitespace is trimmed and blank lines
    /// are skipped.
    pub fn from_text(text: &str) -> Result<Self, InferError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Either a JSON array of names, or a class-index object mapping
    /// `"<index>"` to `[<id>, <name>]` whose indices must run from 0
    /// without gaps.
    pub fn from_json(json: &str) -> Result<Self, InferError> {
        match serde_json::from_str::<LabelFile>(json)? {
            LabelFile::List(labels) => Self::new(labels),
            LabelFile::ClassIndex(entries) => {
                let mut index = BTreeMap::new();
                for (key, (_, name)) in entries {
                    let position: usize = key.parse().map_err(|_| {
                        InferError::Labels(format!("class index key is not a number: {key:?}"))
                    })?;
                    index.insert(position, name);
                }
                let mut labels = Vec::with_capacity(index.len());
                for (expected, (position, name)) in index.into_iter().enumerate() {
                    if position != expected {
                        return Err(InferError::Labels(format!(
                            "class index has a gap: expected {expected}, found {position}"
                        )));
                    }
                    labels.push(name);
                }
                Self::new(labels)
            }
        }
    }

    /// Read asset `name`; `.json` files are parsed with `from_json`,
    /// anything else with `from_text`.
    pub fn load(store: &dyn AssetStore, name: &str) -> Result<Self, InferError> {
        let mut text = String::new();
        store.open(name)?.read_to_string(&mut text)?;
        if name.ends_with(".json") {
            Self::from_json(&text)
        } else {
            Self::from_text(&text)
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
