//! User settings, passed explicitly to whatever needs them.

use std::{env, fs, io::ErrorKind, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default location of the settings file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "luxwheel.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "LUXWHEEL_CONFIG_PATH";
/// Default palette size.
pub const DEFAULT_NUM_POINTS: usize = 5;
/// Palette library file used when the settings do not name one.
pub const DEFAULT_LIBRARY_PATH: &str = "luxwheel-palettes.json";

/// Process-wide preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Skip hue animation and render a single frame.
    pub reduce_motion: bool,
    /// Render charts on a dark background.
    pub dark_theme: bool,
    /// Palette size used when the command line does not give one.
    pub num_points: usize,
    /// Where the palette library lives.
    pub library_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            dark_theme: true,
            num_points: DEFAULT_NUM_POINTS,
            library_path: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from [`CONFIG_PATH_ENV`] / [`DEFAULT_CONFIG_PATH`].
    ///
    /// Never fails: unreadable or malformed files fall back to the defaults with a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(resolve_config_path);
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => {
                    info!(path = %path.display(), "loaded settings");
                    settings.validated()
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse settings; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "settings file not found; using defaults");
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read settings; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Palette library file to use
    pub fn library_path(&self) -> PathBuf {
        self.library_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_PATH))
    }

    fn validated(mut self) -> Self {
        if self.num_points == 0 {
            warn!(
                default = DEFAULT_NUM_POINTS,
                "num_points must be at least 1; using default"
            );
            self.num_points = DEFAULT_NUM_POINTS;
        }
        self
    }
}

fn resolve_config_path() -> PathBuf {
    env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}
