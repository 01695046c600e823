use crate::{
    AnalyzerConfig, AssetStore, Backend, InferError, LabelTable, ModelCache, Session,
    preprocess::center_crop_tensor,
};
use glimpse_base::Tensor;
use glimpse_image::{Frame, Rotation};

/// Best label for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub score: f32,
    pub index: usize,
}

/// Index and value of the largest score.
///
/// The running maximum starts at `(0, 0.0)` and only a strictly greater
/// score replaces it, so ties resolve to the lowest index and a vector with
/// no positive score yields `(0, 0.0)`.
pub fn argmax(scores: &[f32]) -> (usize, f32) {
    let mut best = (0, 0.0f32);
    for (index, &score) in scores.iter().enumerate() {
        if score > best.1 {
            best = (index, score);
        }
    }
    best
}

/// A loaded model paired with its label table and input preprocessing.
pub struct Classifier {
    session: Box<dyn Session>,
    labels: LabelTable,
    config: AnalyzerConfig,
}

impl Classifier {
    pub fn new(session: Box<dyn Session>, labels: LabelTable, config: AnalyzerConfig) -> Self {
        Self {
            session,
            labels,
            config,
        }
    }

    /// Materialize model asset `model_name` through `cache` and load it with
    /// `backend`.
    ///
    /// # Errors
    ///
    /// Any asset, copy or deserialization failure; the classifier is never
    /// built without a valid model.
    pub fn load(
        store: &dyn AssetStore,
        cache: &ModelCache,
        model_name: &str,
        backend: &dyn Backend,
        labels: LabelTable,
        config: AnalyzerConfig,
    ) -> Result<Self, InferError> {
        let session = cache.load_model(store, model_name, backend)?;
        Ok(Self::new(session, labels, config))
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run the model on `tensor` and return its flattened score vector.
    pub fn scores(&mut self, tensor: Tensor<f32>) -> Result<Vec<f32>, InferError> {
        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| InferError::BackendError("model has no inputs".to_string()))?
            .clone();

        let mut outputs = self.session.run(&[(input_name.as_str(), tensor)])?;

        let output_name = self
            .session
            .output_names()
            .first()
            .ok_or_else(|| InferError::BackendError("model has no outputs".to_string()))?;
        let output = outputs.remove(output_name.as_str()).ok_or_else(|| {
            InferError::BackendError(format!("model produced no '{}' output", output_name))
        })?;

        Ok(output.into_data())
    }

    /// Classify an already preprocessed input tensor.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` when the model's score vector and the label table
    /// differ in length, plus any error from the session.
    pub fn classify_tensor(&mut self, tensor: Tensor<f32>) -> Result<Classification, InferError> {
        let scores = self.scores(tensor)?;
        if scores.len() != self.labels.len() {
            return Err(InferError::ShapeMismatch {
                expected: format!("{} scores", self.labels.len()),
                got: format!("{} scores", scores.len()),
            });
        }

        let (index, score) = argmax(&scores);
        let label = self
            .labels
            .get(index)
            .ok_or_else(|| InferError::Labels(format!("no label for class {index}")))?
            .to_string();

        Ok(Classification {
            label,
            score,
            index,
        })
    }

    /// Preprocess `frame` and classify it, without any throttling.
    pub fn classify_frame(
        &mut self,
        frame: &Frame,
        rotation: Rotation,
    ) -> Result<Classification, InferError> {
        let (width, height) = self.config.input_size();
        let tensor = center_crop_tensor(
            frame,
            rotation,
            width,
            height,
            self.config.normalization(),
        )?;
        self.classify_tensor(tensor)
    }
}
