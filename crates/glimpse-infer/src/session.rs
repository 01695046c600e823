use crate::InferError;
use glimpse_base::Tensor;
use std::collections::HashMap;

/// A loaded model, ready to run.
///
/// Sessions are `Send` so a classifier can be moved onto a dedicated worker
/// thread; they are not required to be `Sync` because a session is only ever
/// driven from one thread at a time.
pub trait Session: Send {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError>;
    fn input_names(&self) -> &[String];
    fn output_names(&self) -> &[String];
}
