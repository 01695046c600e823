mod common;

use common::{FakeSession, fake_classifier, labels};
use glimpse_base::Tensor;
use glimpse_image::{Frame, PixelFormat, Rotation};
use glimpse_infer::{AnalyzerConfig, Classifier, InferError};

fn input() -> Tensor<f32> {
    Tensor::zeros(vec![1, 3, 224, 224]).unwrap()
}

#[test]
fn test_classify_picks_highest_score() {
    let (mut classifier, _) =
        fake_classifier(&[0.2, 0.9, 0.1], &["cat", "dog", "bird"], AnalyzerConfig::default());
    let result = classifier.classify_tensor(input()).unwrap();
    assert_eq!(result.label, "dog");
    assert_eq!(result.score, 0.9);
    assert_eq!(result.index, 1);
}

#[test]
fn test_classify_all_zero_scores_defaults_to_first_label() {
    let (mut classifier, _) =
        fake_classifier(&[0.0, 0.0, 0.0], &["cat", "dog", "bird"], AnalyzerConfig::default());
    let result = classifier.classify_tensor(input()).unwrap();
    assert_eq!((result.label.as_str(), result.score), ("cat", 0.0));
}

#[test]
fn test_classify_all_negative_scores_defaults_to_first_label() {
    let (mut classifier, _) =
        fake_classifier(&[-1.5, -0.2, -3.0], &["cat", "dog", "bird"], AnalyzerConfig::default());
    let result = classifier.classify_tensor(input()).unwrap();
    assert_eq!((result.label.as_str(), result.score, result.index), ("cat", 0.0, 0));
}

#[test]
fn test_classify_tie_keeps_lowest_index() {
    let (mut classifier, _) =
        fake_classifier(&[0.1, 0.6, 0.6], &["cat", "dog", "bird"], AnalyzerConfig::default());
    assert_eq!(classifier.classify_tensor(input()).unwrap().label, "dog");
}

#[test]
fn test_classify_rejects_score_label_length_mismatch() {
    let (mut classifier, _) =
        fake_classifier(&[0.1, 0.9], &["cat", "dog", "bird"], AnalyzerConfig::default());
    let result = classifier.classify_tensor(input());
    assert!(matches!(result, Err(InferError::ShapeMismatch { .. })));
}

#[test]
fn test_classify_propagates_session_failure() {
    let mut classifier = Classifier::new(
        Box::new(FakeSession::failing()),
        labels(&["cat"]),
        AnalyzerConfig::default(),
    );
    let result = classifier.classify_tensor(input());
    assert!(matches!(result, Err(InferError::BackendError(_))));
}

#[test]
fn test_classify_frame_feeds_configured_input_size() {
    let config = AnalyzerConfig::default().with_input_size(32, 16);
    let (mut classifier, probe) = fake_classifier(&[0.3, 0.4], &["a", "b"], config);
    let frame = Frame::new(PixelFormat::Gray8, 64, 48, vec![128; 64 * 48]).unwrap();

    let result = classifier.classify_frame(&frame, Rotation::Deg90).unwrap();

    assert_eq!(result.label, "b");
    assert_eq!(probe.last_shape(), Some(vec![1, 3, 16, 32]));
    assert_eq!(probe.runs(), 1);
}

#[test]
fn test_classifier_exposes_labels_and_config() {
    let config = AnalyzerConfig::default().with_input_size(8, 8);
    let (classifier, _) = fake_classifier(&[1.0], &["only"], config.clone());
    assert_eq!(classifier.labels().get(0), Some("only"));
    assert_eq!(classifier.config(), &config);
}
