use std::fmt;

use super::types::{CELL_COUNT, COLS, Cell, Outcome, PlayerColor, Position, ROWS, WinningLine};
use super::win_detector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("location {0} is outside the board")]
    OutOfBounds(usize),
    #[error("location {0} is already occupied")]
    Occupied(usize),
    #[error("no empty cell left to move to")]
    NoLegalMoves,
}

/// Flat location is `row * 6 + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Parses rows of `R`, `B` and `.`; used to set up positions in tests.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, symbol) in line.chars().take(COLS).enumerate() {
                let cell = match symbol {
                    'R' => Cell::Red,
                    'B' => Cell::Blue,
                    _ => Cell::Empty,
                };
                board.cells[Position::new(row, col).to_location()] = cell;
            }
        }
        board
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn is_in_bounds(&self, location: usize) -> bool {
        location < CELL_COUNT
    }

    pub fn cell_at(&self, location: usize) -> Option<Cell> {
        self.cells.get(location).copied()
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !pos.is_on_board() {
            return None;
        }
        self.cell_at(pos.to_location())
    }

    /// Writes `value` regardless of what the cell holds.
    pub fn set_cell(&mut self, location: usize, value: Cell) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(location)
            .ok_or(MoveError::OutOfBounds(location))?;
        *cell = value;
        Ok(())
    }

    /// On `Err` the board is unchanged.
    pub fn apply_move(&mut self, player: PlayerColor, location: usize) -> Result<(), MoveError> {
        match self.cell_at(location) {
            None => Err(MoveError::OutOfBounds(location)),
            Some(Cell::Empty) => self.set_cell(location, Cell::from(player)),
            Some(_) => Err(MoveError::Occupied(location)),
        }
    }

    /// Empty locations in ascending order.
    pub fn empty_locations(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(location, _)| location)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn evaluate_outcome(&self) -> Outcome {
        win_detector::evaluate_outcome(self)
    }

    pub fn find_winning_line(&self) -> Option<WinningLine> {
        win_detector::check_win_with_line(self)
    }

    pub fn outcome_after(&self, player: PlayerColor, location: usize) -> Outcome {
        let mut copy = *self;
        let _ = copy.apply_move(player, location);
        copy.evaluate_outcome()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            let line = (0..COLS)
                .map(|col| format!(" {} ", self.cells[row * COLS + col].symbol()))
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "{}", line)?;
            if row != ROWS - 1 {
                writeln!(f, "{}", "-".repeat(COLS * 4 - 1))?;
            }
        }
        Ok(())
    }
}
