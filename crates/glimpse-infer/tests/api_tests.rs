mod common;

use common::{FakeBackend, fake_model_bytes};
use glimpse_base::Tensor;
use glimpse_infer::{Backend, BackendRegistry, Device, InferError, ModelSource};

#[test]
fn test_device_default_is_cpu() {
    assert_eq!(Device::default(), Device::Cpu);
    assert_eq!(Device::Cpu.to_string(), "CPU");
    assert_eq!(Device::Cuda { device_id: 1 }.to_string(), "CUDA(device_id=1)");
}

#[test]
fn test_infer_error_display() {
    let err = InferError::BackendError("test error".to_string());
    assert_eq!(err.to_string(), "backend error: test error");

    let err = InferError::UnsupportedDevice(Device::Cuda { device_id: 0 });
    assert!(err.to_string().contains("unsupported device"));

    let err = InferError::ModelLoad("failed to load".to_string());
    assert_eq!(err.to_string(), "model load error: failed to load");

    let err = InferError::AssetNotFound("resnet.onnx".to_string());
    assert_eq!(err.to_string(), "asset not found: resnet.onnx");

    let err = InferError::InvalidInput {
        name: "wrong_input".to_string(),
        expected_names: vec!["x".to_string(), "y".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "invalid input name 'wrong_input', expected one of: x, y"
    );

    let err = InferError::ShapeMismatch {
        expected: "1000 scores".to_string(),
        got: "10 scores".to_string(),
    };
    assert_eq!(err.to_string(), "shape mismatch: expected 1000 scores, got 10 scores");
}

#[test]
fn test_error_conversions() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    assert!(matches!(InferError::from(io), InferError::Io(_)));

    let tensor = Tensor::<f32>::new(vec![2, 2], vec![0.0; 3]).unwrap_err();
    assert!(matches!(InferError::from(tensor), InferError::BackendError(_)));

    let json = serde_json::from_str::<Vec<String>>("nope").unwrap_err();
    assert!(matches!(InferError::from(json), InferError::Labels(_)));
}

#[test]
fn test_registry_register_and_lookup() {
    let mut registry = BackendRegistry::new();
    assert!(registry.list().is_empty());
    assert!(registry.get("fake").is_none());
    assert!(matches!(
        registry.require("fake"),
        Err(InferError::UnknownBackend(name)) if name == "fake"
    ));

    registry.register(Box::new(FakeBackend::default()));

    assert_eq!(registry.list(), vec!["fake"]);
    let backend = registry.require("fake").unwrap();
    assert_eq!(backend.name(), "fake");
}

#[test]
fn test_backend_loads_from_memory() {
    let backend = FakeBackend::default();
    let mut session = backend
        .load_model(ModelSource::Memory(fake_model_bytes(&[0.25, 0.75])))
        .unwrap();

    assert_eq!(session.input_names(), &["input".to_string()]);
    assert_eq!(session.output_names(), &["output".to_string()]);

    let input = Tensor::zeros(vec![1, 3, 2, 2]).unwrap();
    let outputs = session.run(&[("input", input)]).unwrap();
    assert_eq!(outputs["output"].data, vec![0.25, 0.75]);
}

#[test]
fn test_session_rejects_unknown_input_name() {
    let backend = FakeBackend::default();
    let mut session = backend
        .load_model(ModelSource::Memory(fake_model_bytes(&[1.0])))
        .unwrap();

    let input = Tensor::zeros(vec![1, 3, 2, 2]).unwrap();
    assert!(matches!(
        session.run(&[("pixels", input)]),
        Err(InferError::InvalidInput { .. })
    ));
}

#[cfg(not(feature = "onnx"))]
#[test]
fn test_default_registry_is_empty_without_runtimes() {
    let registry = glimpse_infer::create_registry(Device::Cpu);
    assert!(registry.list().is_empty());
}
