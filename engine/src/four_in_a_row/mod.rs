mod board;
mod bot_controller;
mod game;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, MoveError};
pub use bot_controller::{
    calculate_move, evaluate_position, find_terminal_move, select_computer_move,
    select_random_move,
};
pub use game::FourInARow;
pub use session_rng::SessionRng;
pub use settings::{ComputerStrategy, EngineSettings};
pub use types::{
    CELL_COUNT, COLS, Cell, Outcome, PlayerColor, Position, ROWS, WIN_LENGTH, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate_outcome};
