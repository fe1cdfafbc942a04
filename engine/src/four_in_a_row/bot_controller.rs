use super::board::{Board, MoveError};
use super::session_rng::SessionRng;
use super::settings::ComputerStrategy;
use super::types::{AXES, Cell, PlayerColor, Position, WIN_LENGTH};

const COMPUTER_WEIGHT: i32 = 1;
const HUMAN_WEIGHT: i32 = 2;

// The candidate is counted by both walks.
const MIN_RUN_LENGTH: i32 = 3;

pub fn calculate_move(
    strategy: ComputerStrategy,
    board: &Board,
    computer: PlayerColor,
    human: PlayerColor,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    match strategy {
        ComputerStrategy::Heuristic => select_computer_move(board, computer, human, rng),
        ComputerStrategy::Random => select_random_move(board, rng),
    }
}

pub fn select_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, MoveError> {
    rng.pick(&board.empty_locations())
        .ok_or(MoveError::NoLegalMoves)
}

/// Win, else block, else the best heuristic score with a random tie-break.
pub fn select_computer_move(
    board: &Board,
    computer: PlayerColor,
    human: PlayerColor,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    let candidates = board.empty_locations();
    if candidates.is_empty() {
        return Err(MoveError::NoLegalMoves);
    }

    if let Some(location) = find_terminal_move(board, computer, &candidates) {
        return Ok(location);
    }

    if let Some(location) = find_terminal_move(board, human, &candidates) {
        return Ok(location);
    }

    let best_moves = best_scoring_moves(board, computer, human, &candidates);
    rng.pick(&best_moves).ok_or(MoveError::NoLegalMoves)
}

pub fn find_terminal_move(board: &Board, player: PlayerColor, candidates: &[usize]) -> Option<usize> {
    candidates
        .iter()
        .copied()
        .find(|&location| board.outcome_after(player, location).is_terminal())
}

pub(crate) fn best_scoring_moves(
    board: &Board,
    computer: PlayerColor,
    human: PlayerColor,
    candidates: &[usize],
) -> Vec<usize> {
    let mut best_score = 0;
    let mut best_moves = Vec::new();

    for &location in candidates {
        let (Some(own), Some(theirs)) = (
            evaluate_position(board, location, computer),
            evaluate_position(board, location, human),
        ) else {
            continue;
        };

        let score = own * COMPUTER_WEIGHT + theirs * HUMAN_WEIGHT;
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(location);
        } else if score == best_score {
            best_moves.push(location);
        }
    }

    best_moves
}

/// `None` for an occupied or off-board location.
pub fn evaluate_position(board: &Board, location: usize, player: PlayerColor) -> Option<i32> {
    let origin = Position::from_location(location)?;
    if !board.cell(origin)?.is_empty() {
        return None;
    }

    let own = Cell::from(player);
    let mut evaluation = 0;

    for (d_row, d_col) in AXES {
        let (forward_length, forward_count) = walk(board, origin, d_row, d_col, own);
        let (backward_length, backward_count) = walk(board, origin, -d_row, -d_col, own);

        if forward_length + backward_length >= MIN_RUN_LENGTH {
            evaluation += forward_count + backward_count;
        }
    }

    Some(evaluation)
}

// (run length, own discs)
fn walk(board: &Board, origin: Position, d_row: isize, d_col: isize, own: Cell) -> (i32, i32) {
    let mut length = 0;
    let mut count = 0;

    for i in 0..WIN_LENGTH as isize {
        let Some(cell) = origin
            .offset(d_row * i, d_col * i)
            .and_then(|pos| board.cell(pos))
        else {
            break;
        };

        if cell == own {
            length += 1;
            count += 1;
        } else if cell.is_empty() {
            length += 1;
        } else {
            break;
        }
    }

    (length, count)
}
