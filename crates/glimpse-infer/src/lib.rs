//! Frame-throttled image classification.
//!
//! A [`FrameAnalyzer`] receives camera frames one at a time, drops those that
//! arrive within the configured interval of the last inference, and runs the
//! rest through a [`Classifier`]: rotation-aware center crop, normalization,
//! model inference and arg-max over the score vector. The best label is
//! handed to a [`ResultListener`].
//!
//! Models are produced by a [`Backend`] from a [`ModelSource`]; packaged
//! model assets are copied into a [`ModelCache`] once and reused afterwards.

pub mod analyzer;
pub mod assets;
pub mod backend;
pub mod backendregistry;
pub mod backends;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod device;
pub mod error;
pub mod labels;
pub mod modelsource;
pub mod preprocess;
pub mod session;
pub mod throttle;

pub use analyzer::{FrameAnalyzer, ResultListener};
pub use assets::{AssetStore, DirAssetStore, MemoryAssetStore};
pub use backend::Backend;
pub use backendregistry::{BackendRegistry, create_registry};
pub use cache::ModelCache;
pub use classifier::{Classification, Classifier, argmax};
pub use config::AnalyzerConfig;
pub use device::Device;
pub use error::InferError;
pub use labels::LabelTable;
pub use modelsource::ModelSource;
pub use preprocess::{Normalization, center_crop_tensor};
pub use session::Session;
pub use throttle::Throttle;

#[cfg(feature = "onnx")]
pub use backends::OnnxBackend;
