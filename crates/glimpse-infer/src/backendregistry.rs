use crate::{Backend, Device, InferError};
use std::collections::HashMap;

pub struct BackendRegistry {
    backends: HashMap<String, Box<dyn Backend>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    pub fn register(&mut self, backend: Box<dyn Backend>) {
        let name = backend.name().to_string();
        self.backends.insert(name, backend);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Backend> {
        self.backends.get(name).map(|b| &**b as &dyn Backend)
    }

    /// Like `get`, but a missing backend is an `UnknownBackend` error.
    pub fn require(&self, name: &str) -> Result<&dyn Backend, InferError> {
        self.get(name)
            .ok_or_else(|| InferError::UnknownBackend(name.to_string()))
    }

    /// Registered backend names, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.backends.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with every backend compiled into this build.
pub fn create_registry(#[allow(unused_variables)] device: Device) -> BackendRegistry {
    #[allow(unused_mut)]
    let mut registry = BackendRegistry::new();

    #[cfg(feature = "onnx")]
    registry.register(Box::new(crate::backends::OnnxBackend::new(device)));

    registry
}
