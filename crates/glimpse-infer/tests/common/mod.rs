#![allow(dead_code)]

use glimpse_base::Tensor;
use glimpse_infer::{
    AnalyzerConfig, AssetStore, Backend, Classifier, InferError, LabelTable, ModelSource, Session,
};
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const FAKE_MODEL_MAGIC: &str = "FAKEMODEL";

/// Serialized form understood by `FakeBackend`: a magic line followed by
/// whitespace separated scores.
pub fn fake_model_bytes(scores: &[f32]) -> Vec<u8> {
    let body: Vec<String> = scores.iter().map(|s| s.to_string()).collect();
    format!("{}\n{}\n", FAKE_MODEL_MAGIC, body.join(" ")).into_bytes()
}

/// Shared observations of a `FakeSession`.
#[derive(Clone, Default)]
pub struct Probe {
    pub runs: Arc<AtomicUsize>,
    pub last_shape: Arc<Mutex<Option<Vec<usize>>>>,
    pub last_input: Arc<Mutex<Option<Vec<f32>>>>,
}

impl Probe {
    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    pub fn last_shape(&self) -> Option<Vec<usize>> {
        self.last_shape.lock().unwrap().clone()
    }

    pub fn last_input(&self) -> Option<Vec<f32>> {
        self.last_input.lock().unwrap().clone()
    }
}

/// Session returning a fixed score vector, or failing on demand.
pub struct FakeSession {
    scores: Vec<f32>,
    fail: bool,
    probe: Probe,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl FakeSession {
    pub fn new(scores: Vec<f32>) -> Self {
        Self {
            scores,
            fail: false,
            probe: Probe::default(),
            input_names: vec!["input".to_string()],
            output_names: vec!["output".to_string()],
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(vec![])
        }
    }

    pub fn probe(&self) -> Probe {
        self.probe.clone()
    }
}

impl Session for FakeSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        self.probe.runs.fetch_add(1, Ordering::SeqCst);
        let (name, tensor) = &inputs[0];
        if *name != "input" {
            return Err(InferError::InvalidInput {
                name: name.to_string(),
                expected_names: self.input_names.clone(),
            });
        }
        *self.probe.last_shape.lock().unwrap() = Some(tensor.shape.clone());
        *self.probe.last_input.lock().unwrap() = Some(tensor.data.clone());

        if self.fail {
            return Err(InferError::BackendError("simulated runtime failure".to_string()));
        }

        let output = Tensor::new(vec![1, self.scores.len()], self.scores.clone())?;
        Ok(HashMap::from([("output".to_string(), output)]))
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

/// Backend that deserializes `fake_model_bytes` files.
#[derive(Default)]
pub struct FakeBackend {
    pub loaded: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeBackend {
    fn parse(bytes: &[u8]) -> Result<Vec<f32>, InferError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| InferError::ModelLoad(format!("not a fake model: {e}")))?;
        let mut lines = text.lines();
        if lines.next() != Some(FAKE_MODEL_MAGIC) {
            return Err(InferError::ModelLoad("bad magic".to_string()));
        }
        lines
            .flat_map(str::split_whitespace)
            .map(|s| {
                s.parse::<f32>()
                    .map_err(|e| InferError::ModelLoad(format!("bad score {s:?}: {e}")))
            })
            .collect()
    }
}

impl Backend for FakeBackend {
    fn name(&self) -> &str {
        "fake"
    }

    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        let bytes = match model {
            ModelSource::File(path) => {
                let mut bytes = Vec::new();
                std::fs::File::open(&path)?.read_to_end(&mut bytes)?;
                self.loaded.lock().unwrap().push(path);
                bytes
            }
            ModelSource::Memory(bytes) => bytes,
        };
        Ok(Box::new(FakeSession::new(Self::parse(&bytes)?)))
    }
}

/// Store wrapper counting how often each asset is opened.
pub struct CountingStore<S> {
    pub inner: S,
    pub opens: AtomicUsize,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            opens: AtomicUsize::new(0),
        }
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

impl<S: AssetStore> AssetStore for CountingStore<S> {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>, InferError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        self.inner.open(name)
    }
}

pub fn labels(names: &[&str]) -> LabelTable {
    LabelTable::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
}

/// Classifier over a `FakeSession` returning `scores`, plus its probe.
pub fn fake_classifier(scores: &[f32], names: &[&str], config: AnalyzerConfig) -> (Classifier, Probe) {
    let session = FakeSession::new(scores.to_vec());
    let probe = session.probe();
    (
        Classifier::new(Box::new(session), labels(names), config),
        probe,
    )
}

/// Per-test scratch directory under the system temp dir, emptied first.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("glimpse-infer-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
