mod settings;

use glimpse_image::{Frame, Rotation, decode_image_file};
use glimpse_infer::{
    AnalyzerConfig, Classifier, Device, DirAssetStore, FrameAnalyzer, LabelTable, ModelCache,
    create_registry,
};
use settings::Settings;
use std::path::{Path, PathBuf};
use std::thread;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tif", "tiff", "webp"];

/// Image files in `dir`, sorted by name.
fn list_frames(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if is_image {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Run the analyzer on its own thread, taking frames from `frames` until the
/// channel closes or analysis fails.
fn spawn_analyzer(
    mut analyzer: FrameAnalyzer,
    mut frames: mpsc::Receiver<Frame>,
    rotation: Rotation,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while let Some(frame) = frames.blocking_recv() {
            if let Err(e) = analyzer.on_frame(&frame, rotation) {
                log::error!("analysis failed, disabling further analysis: {}", e);
                break;
            }
        }
        log::debug!("analyzer thread exiting");
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    glimpse_base::init_stdout_logger();

    let frames_dir: PathBuf = std::env::args()
        .nth(1)
        .ok_or("usage: frame-classify <frames-dir>")?
        .into();
    let settings = Settings::from_env()?;

    log::info!("Frame Classify Experiment");
    log::info!("Frames: {}", frames_dir.display());
    log::info!(
        "Model: {} (labels {}) from {}",
        settings.model,
        settings.labels,
        settings.asset_dir.display()
    );

    let registry = create_registry(Device::Cpu);
    let backend = registry.require(&settings.backend).inspect_err(|_| {
        log::error!("available backends: {:?}", registry.list());
    })?;

    let store = DirAssetStore::new(&settings.asset_dir);
    let cache = ModelCache::new(&settings.cache_dir);
    let labels = LabelTable::load(&store, &settings.labels)?;
    log::info!("{} labels loaded", labels.len());

    let config = AnalyzerConfig::default().with_min_interval(settings.interval);
    let classifier = Classifier::load(&store, &cache, &settings.model, backend, labels, config)?;

    // results travel back to this task; the listener runs on the analyzer thread
    let (result_tx, mut result_rx) = mpsc::unbounded_channel::<(String, f32)>();
    let analyzer = FrameAnalyzer::new(classifier, move |label: &str, score: f32| {
        result_tx.send((label.to_string(), score)).ok();
    });

    let (frame_tx, frame_rx) = mpsc::channel::<Frame>(1);
    let worker = spawn_analyzer(analyzer, frame_rx, settings.rotation);

    let paths = list_frames(&frames_dir)?;
    if paths.is_empty() {
        log::warn!("no image files in {}", frames_dir.display());
    }

    let mut ticker = tokio::time::interval(settings.frame_period());
    let (mut sent, mut skipped) = (0usize, 0usize);
    'stream: for _ in 0..settings.loops {
        for path in &paths {
            ticker.tick().await;

            let frame = match decode_image_file(path).await {
                Ok(frame) => frame,
                Err(e) => {
                    log::warn!("skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            match frame_tx.try_send(frame) {
                Ok(()) => sent += 1,
                Err(TrySendError::Full(_)) => {
                    skipped += 1;
                    log::trace!("analyzer busy, skipping {}", path.display());
                }
                Err(TrySendError::Closed(_)) => {
                    log::warn!("analyzer stopped, ending stream");
                    break 'stream;
                }
            }

            while let Ok((label, score)) = result_rx.try_recv() {
                log::info!("{} ({:.3})", label, score);
            }
        }
    }

    drop(frame_tx);
    tokio::task::spawn_blocking(move || worker.join())
        .await?
        .map_err(|_| "analyzer thread panicked")?;

    while let Some((label, score)) = result_rx.recv().await {
        log::info!("{} ({:.3})", label, score);
    }

    log::info!("{} frames delivered, {} skipped while busy", sent, skipped);
    Ok(())
}
