use crate::InferError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Component, Path, PathBuf};

/// Read-only store of packaged assets (models, label files).
pub trait AssetStore {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, InferError>;
}

/// Reject names that could escape the store or cache directory.
///
/// A valid name is non-empty, relative, and made only of normal path
/// components (`models/resnet.onnx` is fine, `../resnet.onnx` is not).
pub fn validate_asset_name(name: &str) -> Result<(), InferError> {
    let path = Path::new(name);
    let valid = !name.is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
    if valid {
        Ok(())
    } else {
        Err(InferError::InvalidAssetName(name.to_string()))
    }
}

/// Assets stored as files under a root directory.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetStore for DirAssetStore {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, InferError> {
        validate_asset_name(name)?;
        match File::open(self.root.join(name)) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(InferError::AssetNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Assets held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.assets.insert(name.into(), bytes.into());
    }

    pub fn with_asset(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl AssetStore for MemoryAssetStore {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, InferError> {
        validate_asset_name(name)?;
        self.assets
            .get(name)
            .map(|bytes| Box::new(Cursor::new(bytes.as_slice())) as Box<dyn Read + '_>)
            .ok_or_else(|| InferError::AssetNotFound(name.to_string()))
    }
}
