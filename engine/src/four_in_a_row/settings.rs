use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::PlayerColor;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputerStrategy {
    #[default]
    Heuristic,
    Random,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub computer_color: PlayerColor,
    pub player_color: PlayerColor,
    #[serde(default)]
    pub strategy: ComputerStrategy,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl EngineSettings {
    pub fn with_computer_color(computer_color: PlayerColor) -> Self {
        Self {
            computer_color,
            player_color: computer_color.opponent(),
            ..Self::default()
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            computer_color: PlayerColor::Blue,
            player_color: PlayerColor::Red,
            strategy: ComputerStrategy::Heuristic,
            seed: None,
        }
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<(), String> {
        if self.computer_color == self.player_color {
            return Err(format!(
                "Computer and player cannot share the color {:?}",
                self.computer_color
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_settings_are_valid() {
        assert!(EngineSettings::default().validate().is_ok());
    }

    #[test]
    fn test_with_computer_color_assigns_opponent_to_player() {
        let settings = EngineSettings::with_computer_color(PlayerColor::Red);
        assert_eq!(settings.player_color, PlayerColor::Blue);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_shared_color_is_rejected() {
        let settings = EngineSettings {
            player_color: PlayerColor::Blue,
            ..EngineSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_without_optional_fields_uses_defaults() {
        let serializer = YamlConfigSerializer::new();
        let settings: EngineSettings = serializer
            .deserialize("computer_color: Red\nplayer_color: Blue\n")
            .unwrap();
        assert_eq!(settings.strategy, ComputerStrategy::Heuristic);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.computer_color, PlayerColor::Red);
    }
}
