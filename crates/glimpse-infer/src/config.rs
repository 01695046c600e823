use crate::Normalization;
use std::time::Duration;

/// Default minimum time between two inferences.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(500);

/// Default model input size (width, height).
pub const DEFAULT_INPUT_SIZE: (u32, u32) = (224, 224);

/// Configuration for frame analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyzerConfig {
    min_interval: Duration,
    input_width: u32,
    input_height: u32,
    normalization: Normalization,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_interval: DEFAULT_MIN_INTERVAL,
            input_width: DEFAULT_INPUT_SIZE.0,
            input_height: DEFAULT_INPUT_SIZE.1,
            normalization: Normalization::IMAGENET,
        }
    }
}

impl AnalyzerConfig {
    /// Set the minimum interval between inferences. Zero disables throttling.
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Set the model input size in pixels.
    pub fn with_input_size(mut self, width: u32, height: u32) -> Self {
        self.input_width = width;
        self.input_height = height;
        self
    }

    /// Set the per-channel normalization.
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    // Getters
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn input_size(&self) -> (u32, u32) {
        (self.input_width, self.input_height)
    }

    pub fn normalization(&self) -> &Normalization {
        &self.normalization
    }
}
