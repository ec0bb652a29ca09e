use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigSerializer, Validate, YamlConfigSerializer};

/// Settings persisted as a single file on disk. A missing file is not an
/// error: `load` falls back to `TConfig::default()`.
pub struct SettingsFile<TSerializer = YamlConfigSerializer> {
    path: PathBuf,
    serializer: TSerializer,
}

impl SettingsFile<YamlConfigSerializer> {
    pub fn yaml(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            serializer: YamlConfigSerializer,
        }
    }
}

impl<TSerializer> SettingsFile<TSerializer> {
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn load<TConfig>(&self) -> Result<TConfig, String>
    where
        TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
        TSerializer: ConfigSerializer<TConfig>,
    {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TConfig::default()),
            Err(err) => {
                return Err(format!(
                    "Failed to read settings file {}: {}",
                    self.path.display(),
                    err
                ));
            }
        };

        let config: TConfig = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;
        Ok(config)
    }

    pub fn save<TConfig>(&self, config: &TConfig) -> Result<(), String>
    where
        TConfig: for<'de> Deserialize<'de> + Serialize + Validate,
        TSerializer: ConfigSerializer<TConfig>,
    {
        config
            .validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;
        let content = self.serializer.serialize(config)?;
        std::fs::write(&self.path, content).map_err(|e| {
            format!(
                "Failed to write settings file {}: {}",
                self.path.display(),
                e
            )
        })
    }
}
