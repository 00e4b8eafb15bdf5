use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use fortune_core::Name;
use fortune_core::color::ColorMode;
use fortune_core::render::WheelLayout;
use fortune_core::spin::SpinParams;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "David", "Eve"];

fn default_names() -> Vec<Name> {
    DEFAULT_NAMES.into_iter().map(Name::from).collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Names that are always on the wheel and never removed.
    #[serde(default = "default_names")]
    pub names: Vec<Name>,
    #[serde(default)]
    pub colors: ColorMode,
    #[serde(default)]
    pub sound: Option<PathBuf>,
    #[serde(default)]
    pub spin: SpinParams,
    #[serde(default)]
    pub wheel: WheelLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            names: default_names(),
            colors: ColorMode::default(),
            sound: None,
            spin: SpinParams::default(),
            wheel: WheelLayout::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "fortune", "fortune").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("FORTUNE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn bundled_config_matches_defaults() {
        let cfg = parse(DEFAULT_CONFIG);
        let defaults = Config::default();
        assert_eq!(cfg.names, defaults.names);
        assert_eq!(cfg.colors, ColorMode::Flicker);
        assert_eq!(cfg.spin, defaults.spin);
        assert_eq!(cfg.wheel, defaults.wheel);
        assert!(cfg.sound.is_none());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg = parse(
            r#"
colors = "Stable"

[spin]
duration_ms = 3000
"#,
        );
        assert_eq!(cfg.names, default_names());
        assert_eq!(cfg.colors, ColorMode::Stable);
        assert_eq!(cfg.spin.duration_ms, 3000);
        assert_eq!(cfg.spin.decay, SpinParams::default().decay);
    }

    #[test]
    fn custom_fixed_names() {
        let cfg = parse(r#"names = ["Ann", "Ben"]"#);
        assert_eq!(cfg.names, vec![Name::from("Ann"), Name::from("Ben")]);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let cfg = load_or_default(Path::new("/nonexistent/fortune/config.toml"));
        assert_eq!(cfg.names.len(), DEFAULT_NAMES.len());
    }
}
