use connectn_engine::config::Validate;
use connectn_engine::four_in_a_row::{Outcome, PlayerColor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Scoreboard {
    /// Counts a finished game from the human's side. Ongoing games are ignored.
    pub fn record(&mut self, outcome: Outcome, player_color: PlayerColor) {
        match (outcome, outcome.winner()) {
            (Outcome::Tie, _) => self.ties = self.ties.saturating_add(1),
            (_, Some(winner)) if winner == player_color => self.wins = self.wins.saturating_add(1),
            (_, Some(_)) => self.losses = self.losses.saturating_add(1),
            (_, None) => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.ties)
    }
}

impl Validate for Scoreboard {
    fn validate(&self) -> Result<(), String> {
        self.wins
            .checked_add(self.losses)
            .and_then(|sum| sum.checked_add(self.ties))
            .map(|_| ())
            .ok_or_else(|| "scoreboard totals overflow".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_from_player_side() {
        let mut scoreboard = Scoreboard::default();
        scoreboard.record(Outcome::RedWon, PlayerColor::Red);
        scoreboard.record(Outcome::BlueWon, PlayerColor::Red);
        scoreboard.record(Outcome::Tie, PlayerColor::Red);
        scoreboard.record(Outcome::Ongoing, PlayerColor::Red);

        assert_eq!(
            scoreboard,
            Scoreboard {
                wins: 1,
                losses: 1,
                ties: 1
            }
        );
        assert_eq!(scoreboard.games_played(), 3);
    }

    #[test]
    fn test_overflowing_totals_are_invalid() {
        let scoreboard = Scoreboard {
            wins: u32::MAX,
            losses: 1,
            ties: 0,
        };
        assert!(scoreboard.validate().is_err());
    }

    #[test]
    fn test_record_on_maxed_scoreboard_saturates() {
        let mut scoreboard = Scoreboard {
            wins: u32::MAX,
            losses: 0,
            ties: 0,
        };
        assert!(scoreboard.validate().is_ok());

        scoreboard.record(Outcome::RedWon, PlayerColor::Red);
        assert_eq!(scoreboard.wins, u32::MAX);
        assert_eq!(scoreboard.games_played(), u32::MAX);

        scoreboard.record(Outcome::Tie, PlayerColor::Red);
        assert_eq!(scoreboard.ties, 1);
        assert_eq!(scoreboard.games_played(), u32::MAX);
    }
}
