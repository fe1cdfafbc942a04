use connectn_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use connectn_engine::four_in_a_row::EngineSettings;
use serde::{Deserialize, Serialize};

use super::{FirstPlayerMode, Scoreboard};

const CONFIG_FILE_NAME: &str = "connectn_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_name: String,
    pub engine: EngineSettings,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
    #[serde(default)]
    pub scoreboard: Scoreboard,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.player_name.trim().is_empty() {
            return Err("player_name must not be empty".to_string());
        }
        self.engine.validate()?;
        self.scoreboard.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            engine: EngineSettings::default(),
            first_player: FirstPlayerMode::Player,
            scoreboard: Scoreboard::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectn_engine::config::{ConfigContentProvider, ConfigSerializer};
    use connectn_engine::four_in_a_row::PlayerColor;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_connectn_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = Config {
            player_name: "Ada".to_string(),
            engine: EngineSettings {
                seed: Some(12),
                ..EngineSettings::with_computer_color(PlayerColor::Red)
            },
            first_player: FirstPlayerMode::Computer,
            scoreboard: Scoreboard {
                wins: 2,
                losses: 1,
                ties: 0,
            },
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_str()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let reopened = get_config_manager(Some(file_path.as_str()));
        assert_eq!(reopened.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_connectn_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            player_name: Ada
            engine:
              computer_color: Red
              player_color: Red
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_blank_player_name_is_invalid() {
        let config = Config {
            player_name: "   ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
