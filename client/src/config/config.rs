use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_core::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

const CONFIG_FILE_NAME: &str = "tictactoe_cli_config.yaml";

const MAX_BOT_DELAY_MS: u64 = 10_000;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

/// Reads the stored config. A missing file yields the default, which is
/// written out when the location allows it.
pub fn load_config(path: Option<PathBuf>) -> Result<Config, String> {
    get_config_manager(path).get_or_create_config()
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Pause before the computer answers, purely for pacing.
    pub bot_delay_ms: u64,
    #[serde(default)]
    pub show_move_scores: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_delay_ms: 500,
            show_move_scores: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_cli_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_saved_through_manager_is_reloaded() {
        let config = Config {
            bot_delay_ms: 0,
            show_move_scores: true,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));
        assert!(manager.set_config(&config).is_ok());

        let fresh_manager = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_load_config_writes_default_file() {
        let file_path = get_temp_file_path();
        assert_eq!(load_config(Some(file_path.clone())).unwrap(), Config::default());

        let provider = FileContentConfigProvider::new(file_path.clone());
        assert!(provider.get_config_content().unwrap().is_some());

        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_load_config_falls_back_when_location_is_unwritable() {
        tictactoe_core::logger::init_logger(None, false);

        // A regular file where the config directory should be makes the write fail.
        let blocker = get_temp_file_path();
        std::fs::write(&blocker, "not a directory").unwrap();
        let file_path = blocker.join("tictactoe_cli_config.yaml");

        assert_eq!(load_config(Some(file_path.clone())).unwrap(), Config::default());
        assert!(!file_path.exists());

        std::fs::remove_file(blocker).unwrap();
    }

    #[test]
    fn test_show_move_scores_defaults_to_false() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize("bot_delay_ms: 250\n").unwrap();
        assert_eq!(config.bot_delay_ms, 250);
        assert!(!config.show_move_scores);
    }

    #[test]
    fn test_excessive_delay_cant_be_read() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content("bot_delay_ms: 60000\nshow_move_scores: false\n")
            .unwrap();

        let manager = get_config_manager(Some(file_path.clone()));
        assert!(manager.get_config().is_err());

        std::fs::remove_file(file_path).unwrap();
    }
}
