use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LauncherError, Result};

const CONFIG_FILE: &str = "config.json";
const GAME_DIR_NAME: &str = ".nimbus";
const DEFAULT_MINECRAFT_VERSION: &str = "1.19.2";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Minecraft version id as it appears in the Mojang version manifest.
    pub minecraft_version: String,
    /// Install the Fabric loader and the bundled mod set, and boot the game
    /// through the Knot client.
    pub fabric: bool,
    /// JVM heap cap in GiB. `None` derives a cap from total system memory.
    pub max_memory_gb: Option<u64>,
    /// Overrides the default `~/.nimbus` game directory.
    pub game_dir: Option<PathBuf>,
    /// Appended verbatim to the JVM arguments.
    pub extra_jvm_args: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            minecraft_version: DEFAULT_MINECRAFT_VERSION.to_string(),
            fabric: true,
            max_memory_gb: None,
            game_dir: None,
            extra_jvm_args: Vec::new(),
        }
    }
}

impl LauncherConfig {
    /// Load the config from `<game dir>/config.json`, falling back to
    /// defaults when no file exists. A file that exists but does not parse
    /// is an error rather than a silent reset.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path,
            None => default_game_dir()?.join(CONFIG_FILE),
        };

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(path) => path,
            None => self.game_dir()?.join(CONFIG_FILE),
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Effective game directory, honoring the override.
    pub fn game_dir(&self) -> Result<PathBuf> {
        match &self.game_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_game_dir(),
        }
    }
}

fn default_game_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        LauncherError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "home directory not found",
        ))
    })?;
    Ok(home.join(GAME_DIR_NAME))
}
