use crate::Device;
use glimpse_image::ImageError;
use std::fmt;

#[derive(Debug)]
pub enum InferError {
    BackendError(String),
    UnsupportedDevice(Device),
    UnknownBackend(String),
    ModelLoad(String),
    AssetNotFound(String),
    InvalidAssetName(String),
    Io(String),
    Labels(String),
    UnsupportedDtype(String),
    InvalidInput {
        name: String,
        expected_names: Vec<String>,
    },
    ShapeMismatch {
        expected: String,
        got: String,
    },
    Image(ImageError),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::BackendError(msg) => write!(f, "backend error: {msg}"),
            InferError::UnsupportedDevice(device) => write!(f, "unsupported device: {device}"),
            InferError::UnknownBackend(name) => write!(f, "unknown backend: {name}"),
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::AssetNotFound(name) => write!(f, "asset not found: {name}"),
            InferError::InvalidAssetName(name) => write!(f, "invalid asset name: {name:?}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
            InferError::Labels(msg) => write!(f, "label table error: {msg}"),
            InferError::UnsupportedDtype(msg) => write!(f, "unsupported dtype: {msg}"),
            InferError::InvalidInput {
                name,
                expected_names,
            } => write!(
                f,
                "invalid input name '{name}', expected one of: {}",
                expected_names.join(", ")
            ),
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<ImageError> for InferError {
    fn from(err: ImageError) -> Self {
        InferError::Image(err)
    }
}

impl From<glimpse_base::TensorError> for InferError {
    fn from(err: glimpse_base::TensorError) -> Self {
        InferError::BackendError(format!("tensor error: {err}"))
    }
}

impl From<serde_json::Error> for InferError {
    fn from(err: serde_json::Error) -> Self {
        InferError::Labels(err.to_string())
    }
}
