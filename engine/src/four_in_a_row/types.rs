use serde::{Deserialize, Serialize};

pub const ROWS: usize = 6;
pub const COLS: usize = 6;
pub const CELL_COUNT: usize = ROWS * COLS;
pub const WIN_LENGTH: usize = 4;

// right, down-left, down, down-right
pub(crate) const AXES: [(isize, isize); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    pub fn opponent(self) -> PlayerColor {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            PlayerColor::Red => 'R',
            PlayerColor::Blue => 'B',
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Blue,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<PlayerColor> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(PlayerColor::Red),
            Cell::Blue => Some(PlayerColor::Blue),
        }
    }

    pub fn symbol(self) -> char {
        self.owner().map_or(' ', PlayerColor::symbol)
    }
}

impl From<PlayerColor> for Cell {
    fn from(color: PlayerColor) -> Self {
        match color {
            PlayerColor::Red => Cell::Red,
            PlayerColor::Blue => Cell::Blue,
        }
    }
}

/// Game status derived from the board. Never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    RedWon,
    BlueWon,
    Tie,
}

impl Outcome {
    pub fn won_by(color: PlayerColor) -> Outcome {
        match color {
            PlayerColor::Red => Outcome::RedWon,
            PlayerColor::Blue => Outcome::BlueWon,
        }
    }

    pub fn winner(self) -> Option<PlayerColor> {
        match self {
            Outcome::RedWon => Some(PlayerColor::Red),
            Outcome::BlueWon => Some(PlayerColor::Blue),
            Outcome::Ongoing | Outcome::Tie => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_location(self) -> usize {
        self.row * COLS + self.col
    }

    pub fn from_location(location: usize) -> Option<Self> {
        if location >= CELL_COUNT {
            return None;
        }
        Some(Self {
            row: location / COLS,
            col: location % COLS,
        })
    }

    pub fn is_on_board(self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let moved = Position::new(row, col);
        moved.is_on_board().then_some(moved)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub color: PlayerColor,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(color: PlayerColor, start: Position, end: Position) -> Self {
        Self { color, start, end }
    }

    pub fn locations(&self) -> Vec<usize> {
        let d_row = self.end.row as isize - self.start.row as isize;
        let d_col = self.end.col as isize - self.start.col as isize;
        let steps = d_row.abs().max(d_col.abs());
        if steps == 0 {
            return vec![self.start.to_location()];
        }
        (0..=steps)
            .filter_map(|i| self.start.offset(d_row / steps * i, d_col / steps * i))
            .map(Position::to_location)
            .collect()
    }
}
