use std::path::PathBuf;

/// Serialized model handed to a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    File(PathBuf),
    Memory(Vec<u8>),
}
