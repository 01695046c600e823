use crate::{AssetStore, Backend, InferError, ModelSource, Session, assets::validate_asset_name};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Writable directory holding local copies of packaged assets.
///
/// Runtimes load models from a file path, while packaged assets may only be
/// readable as streams. The cache materializes each asset once under its own
/// name and reuses the copy on later runs.
#[derive(Debug, Clone)]
pub struct ModelCache {
    dir: PathBuf,
}

impl ModelCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache location for asset `name`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, InferError> {
        validate_asset_name(name)?;
        Ok(self.dir.join(name))
    }

    /// Whether a usable (non-empty) copy of `name` is already cached.
    pub fn contains(&self, name: &str) -> bool {
        self.path_for(name)
            .ok()
            .and_then(|path| fs::metadata(path).ok())
            .is_some_and(|meta| meta.is_file() && meta.len() > 0)
    }

    /// Return a local path to asset `name`, copying it out of `store` first
    /// unless a non-empty cached copy exists.
    ///
    /// The copy is written to a `.part` file and renamed into place, so an
    /// interrupted copy is never mistaken for a cached model.
    ///
    /// # Errors
    ///
    /// `InvalidAssetName` for unsafe names, `AssetNotFound` when the store
    /// lacks the asset, `ModelLoad` when the asset is empty, `Io` when the
    /// copy fails.
    pub fn materialize(&self, store: &dyn AssetStore, name: &str) -> Result<PathBuf, InferError> {
        let target = self.path_for(name)?;
        if self.contains(name) {
            log::debug!("asset {} already cached at {}", name, target.display());
            return Ok(target);
        }

        let mut reader = store.open(name)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut partial = target.clone().into_os_string();
        partial.push(".part");
        let partial = PathBuf::from(partial);

        let bytes = match copy_to_file(&mut reader, &partial) {
            Ok(bytes) => bytes,
            Err(e) => {
                fs::remove_file(&partial).ok();
                return Err(e.into());
            }
        };
        if bytes == 0 {
            fs::remove_file(&partial).ok();
            return Err(InferError::ModelLoad(format!("asset {name} is empty")));
        }
        fs::rename(&partial, &target)?;

        log::info!("copied asset {} ({} bytes) to {}", name, bytes, target.display());
        Ok(target)
    }

    /// Materialize model asset `name` and deserialize it with `backend`.
    ///
    /// A blocking, one-time construction step. There is no fallback: any
    /// failure is returned to the caller.
    pub fn load_model(
        &self,
        store: &dyn AssetStore,
        name: &str,
        backend: &dyn Backend,
    ) -> Result<Box<dyn Session>, InferError> {
        let path = self.materialize(store, name)?;
        log::info!("loading model {} with backend {}", name, backend.name());
        backend.load_model(ModelSource::File(path))
    }
}

fn copy_to_file(reader: &mut dyn Read, path: &Path) -> io::Result<u64> {
    let mut file = File::create(path)?;
    let bytes = io::copy(reader, &mut file)?;
    file.flush()?;
    file.sync_all()?;
    Ok(bytes)
}
