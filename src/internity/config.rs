use crate::error::{InternityError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DATA_FILENAME: &str = "internity.txt";
const DATA_SUBDIR: &str = "data";

/// User configuration, stored as `config.json` in the config directory.
///
/// The config directory must not be the data directory: loading the data file
/// removes every other file next to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InternityConfig {
    /// Overrides the default location of the data file.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Print the logo when an interactive session starts.
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_show_banner() -> bool {
    true
}

impl Default for InternityConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            show_banner: default_show_banner(),
        }
    }
}

impl InternityConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(InternityError::Io)?;
        let config: InternityConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(InternityError::Io)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(InternityError::Io)?;
        Ok(())
    }

    /// Picks the data file: explicit override, then config, then a `data`
    /// folder under the platform data dir, then `./data`.
    ///
    /// Some platforms hand out the same folder for config and data, so the
    /// default file always gets a folder of its own.
    pub fn resolve_data_file(
        &self,
        override_path: Option<&Path>,
        platform_data_dir: Option<&Path>,
    ) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        match platform_data_dir {
            Some(dir) => dir.join(DATA_SUBDIR).join(DATA_FILENAME),
            None => Path::new("data").join(DATA_FILENAME),
        }
    }
}
