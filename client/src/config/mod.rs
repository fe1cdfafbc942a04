mod config;
mod first_player;
mod scoreboard;

pub use config::{Config, get_config_manager};
pub use first_player::FirstPlayerMode;
pub use scoreboard::Scoreboard;
