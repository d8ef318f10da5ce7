use crate::log;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    /// Loads and caches the stored config, or returns the default when nothing is stored.
    pub fn get_config(&self) -> Result<TConfig, String> {
        Ok(self.load()?.unwrap_or_default())
    }

    /// Like `get_config`, but also tries to write the default out when nothing
    /// is stored yet. A failed write is logged and the default is still returned.
    pub fn get_or_create_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.load()? {
            return Ok(config);
        }

        let config = TConfig::default();
        if let Err(e) = self.set_config(&config) {
            log!("Using default config, could not store it: {}", e);
        }
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.lock()? = Some(config.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<TConfig>, String> {
        let mut current = self.lock()?;

        if let Some(config) = current.as_ref() {
            return Ok(Some(config.clone()));
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(None);
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(Some(config))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<TConfig>>, String> {
        self.config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())
    }
}
