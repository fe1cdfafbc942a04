use crate::config::Validate;
use crate::log;
use super::board::{Board, MoveError};
use super::bot_controller::calculate_move;
use super::session_rng::SessionRng;
use super::settings::EngineSettings;
use super::types::{Cell, Outcome, PlayerColor, WinningLine};

pub struct FourInARow {
    board: Board,
    settings: EngineSettings,
    rng: SessionRng,
}

impl FourInARow {
    pub fn new(settings: EngineSettings, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        Ok(Self {
            board: Board::new(),
            settings,
            rng,
        })
    }

    /// Seeds from `settings.seed`, or from entropy when unset.
    pub fn from_settings(settings: EngineSettings) -> Result<Self, String> {
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        Self::new(settings, rng)
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn computer_color(&self) -> PlayerColor {
        self.settings.computer_color
    }

    pub fn player_color(&self) -> PlayerColor {
        self.settings.player_color
    }

    pub fn clear_board(&mut self) {
        self.board.clear();
    }

    pub fn set_move(&mut self, player: PlayerColor, location: usize) -> Result<(), MoveError> {
        self.board.apply_move(player, location)
    }

    pub fn player_move(&mut self, location: usize) -> Result<(), MoveError> {
        self.set_move(self.settings.player_color, location)
    }

    pub fn cell_at(&self, location: usize) -> Option<Cell> {
        self.board.cell_at(location)
    }

    pub fn check_for_winner(&self) -> Outcome {
        self.board.evaluate_outcome()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.find_winning_line()
    }

    pub fn computer_move(&mut self) -> Result<usize, MoveError> {
        calculate_move(
            self.settings.strategy,
            &self.board,
            self.settings.computer_color,
            self.settings.player_color,
            &mut self.rng,
        )
    }

    pub fn play_computer_move(&mut self) -> Result<usize, MoveError> {
        let location = self.computer_move()?;
        self.set_move(self.settings.computer_color, location)?;
        log!(
            "Computer ({:?}) played location {}",
            self.settings.computer_color,
            location
        );
        Ok(location)
    }
}
