use glimpse_image::Rotation;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const ASSET_DIR_ENV: &str = "GLIMPSE_ASSET_DIR";
pub const CACHE_DIR_ENV: &str = "GLIMPSE_CACHE_DIR";
pub const MODEL_ENV: &str = "GLIMPSE_MODEL";
pub const LABELS_ENV: &str = "GLIMPSE_LABELS";
pub const BACKEND_ENV: &str = "GLIMPSE_BACKEND";
pub const INTERVAL_ENV: &str = "GLIMPSE_INTERVAL_MS";
pub const ROTATION_ENV: &str = "GLIMPSE_ROTATION";
pub const FPS_ENV: &str = "GLIMPSE_FPS";
pub const LOOPS_ENV: &str = "GLIMPSE_LOOPS";

/// Highest accepted frame rate for the simulated stream.
pub const MAX_FPS: u32 = 1000;

#[derive(Debug, PartialEq)]
pub struct SettingsError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.key, self.value)
    }
}

impl std::error::Error for SettingsError {}

/// Runtime settings of the frame-classify shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub asset_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub model: String,
    pub labels: String,
    pub backend: String,
    pub interval: Duration,
    pub rotation: Rotation,
    pub fps: u32,
    pub loops: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let interval_ms: u64 = parse(&lookup, INTERVAL_ENV, 500)?;
        let degrees: i32 = parse(&lookup, ROTATION_ENV, 0)?;
        let rotation = Rotation::from_degrees(degrees).map_err(|_| SettingsError {
            key: ROTATION_ENV,
            value: degrees.to_string(),
        })?;
        let fps: u32 = parse(&lookup, FPS_ENV, 30)?;
        if fps == 0 || fps > MAX_FPS {
            return Err(SettingsError {
                key: FPS_ENV,
                value: fps.to_string(),
            });
        }

        Ok(Self {
            asset_dir: string(ASSET_DIR_ENV, "assets").into(),
            cache_dir: lookup(CACHE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join("glimpse-cache")),
            model: string(MODEL_ENV, "resnet.onnx"),
            labels: string(LABELS_ENV, "labels.txt"),
            backend: string(BACKEND_ENV, "onnx"),
            interval: Duration::from_millis(interval_ms),
            rotation,
            fps,
            loops: parse(&lookup, LOOPS_ENV, 1)?,
        })
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, SettingsError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| SettingsError { key, value }),
    }
}
