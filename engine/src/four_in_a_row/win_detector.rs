use super::board::Board;
use super::types::{AXES, COLS, Cell, Outcome, PlayerColor, Position, ROWS, WIN_LENGTH, WinningLine};

/// The first line by row-major anchor is reported, not the most recent one.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for row in 0..ROWS {
        for col in 0..COLS {
            let start = Position::new(row, col);
            let Some(color) = board.cell(start).and_then(Cell::owner) else {
                continue;
            };

            for (d_row, d_col) in AXES {
                if let Some(end) = ray_end(board, start, d_row, d_col, color) {
                    return Some(WinningLine::new(color, start, end));
                }
            }
        }
    }

    None
}

pub fn check_win(board: &Board) -> Option<PlayerColor> {
    check_win_with_line(board).map(|line| line.color)
}

pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(color) = check_win(board) {
        return Outcome::won_by(color);
    }

    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::Ongoing
    }
}

fn ray_end(
    board: &Board,
    start: Position,
    d_row: isize,
    d_col: isize,
    color: PlayerColor,
) -> Option<Position> {
    let target = Cell::from(color);
    let mut end = start;
    for i in 1..WIN_LENGTH as isize {
        let pos = start.offset(d_row * i, d_col * i)?;
        if board.cell(pos) != Some(target) {
            return None;
        }
        end = pos;
    }
    Some(end)
}
