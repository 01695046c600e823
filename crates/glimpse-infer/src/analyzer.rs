use crate::{Classification, Classifier, InferError, Throttle};
use glimpse_base::{Clock, SystemClock};
use glimpse_image::{Frame, Rotation};
use std::sync::Arc;

/// Receives the result of every accepted frame.
///
/// Called synchronously on the thread that delivered the frame. Any closure
/// `FnMut(&str, f32)` is a listener.
pub trait ResultListener: Send {
    fn on_result(&mut self, label: &str, score: f32);
}

impl<F> ResultListener for F
where
    F: FnMut(&str, f32) + Send,
{
    fn on_result(&mut self, label: &str, score: f32) {
        self(label, score)
    }
}

/// Frame-throttled classifier.
///
/// Frames must be delivered serially; `on_frame` takes `&mut self`, so
/// sharing an analyzer between threads needs external locking.
pub struct FrameAnalyzer {
    classifier: Classifier,
    throttle: Throttle,
    listener: Box<dyn ResultListener>,
}

impl FrameAnalyzer {
    /// Analyzer on the system monotonic clock, throttled by the classifier's
    /// configured minimum interval.
    pub fn new(classifier: Classifier, listener: impl ResultListener + 'static) -> Self {
        Self::with_clock(classifier, listener, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(
        classifier: Classifier,
        listener: impl ResultListener + 'static,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let throttle = Throttle::new(clock, classifier.config().min_interval());
        Self {
            classifier,
            throttle,
            listener: Box::new(listener),
        }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn throttle(&self) -> &Throttle {
        &self.throttle
    }

    /// Classify `frame` unless the previous inference was too recent.
    ///
    /// Returns `Ok(None)` for a dropped frame; the listener is not called and
    /// nothing changes. Otherwise the throttle is advanced *before* inference,
    /// the listener receives `(label, score)` and the classification is
    /// returned as well.
    ///
    /// # Errors
    ///
    /// Preprocessing and model errors are returned as is, without retry. The
    /// throttle stays advanced, so the next frame still waits out the window.
    pub fn on_frame(
        &mut self,
        frame: &Frame,
        rotation: Rotation,
    ) -> Result<Option<Classification>, InferError> {
        if !self.throttle.try_acquire() {
            log::trace!("frame dropped inside throttle window");
            return Ok(None);
        }

        let classification = self.classifier.classify_frame(frame, rotation)?;
        log::debug!(
            "classified {}x{} frame as {} ({:.3})",
            frame.width(),
            frame.height(),
            classification.label,
            classification.score
        );

        self.listener
            .on_result(&classification.label, classification.score);
        Ok(Some(classification))
    }
}
