use crate::{InferError, ModelSource, Session};

/// A model runtime able to deserialize models into runnable sessions.
pub trait Backend {
    fn name(&self) -> &str;
    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError>;
}
