use std::io::{self, BufRead, Write};

use connectn_engine::four_in_a_row::{COLS, FourInARow, Outcome, Position, ROWS};
use connectn_engine::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished(Outcome),
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Quit,
}

/// Accepts a location index, `row col`, or `q`/`quit`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    match parts.as_slice() {
        [location] => location
            .parse::<usize>()
            .map(Command::Place)
            .map_err(|_| format!("Invalid location '{}'", location)),
        [row, col] => {
            let row: usize = row.parse().map_err(|_| format!("Invalid row '{}'", row))?;
            let col: usize = col.parse().map_err(|_| format!("Invalid column '{}'", col))?;
            if row >= ROWS || col >= COLS {
                return Err(format!(
                    "Row and column must be below {} and {}",
                    ROWS, COLS
                ));
            }
            Ok(Command::Place(Position::new(row, col).to_location()))
        }
        _ => Err("Enter a location 0-35, a row and column, or q to quit".to_string()),
    }
}

fn describe_outcome(game: &FourInARow, outcome: Outcome, player_name: &str) -> String {
    match outcome.winner() {
        Some(color) if color == game.player_color() => format!("{} wins!", player_name),
        Some(color) => format!("Computer ({:?}) wins.", color),
        None => "It's a tie.".to_string(),
    }
}

/// Drives one game until it ends, the player quits, or input runs out.
pub fn run_game<R: BufRead, W: Write>(
    game: &mut FourInARow,
    first: Turn,
    player_name: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<GameEnd> {
    let mut turn = first;
    writeln!(output, "{}", game.board())?;

    loop {
        let outcome = game.check_for_winner();
        if outcome.is_terminal() {
            writeln!(output, "{}", describe_outcome(game, outcome, player_name))?;
            if let Some(line) = game.winning_line() {
                writeln!(output, "Winning line: {:?}", line.locations())?;
            }
            log!("Game finished: {:?}", outcome);
            return Ok(GameEnd::Finished(outcome));
        }

        match turn {
            Turn::Player => {
                write!(
                    output,
                    "{} ({:?}), your move [0-35 or row col, q to quit]: ",
                    player_name,
                    game.player_color()
                )?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Ok(GameEnd::Quit);
                }

                match parse_command(&line) {
                    Ok(Command::Quit) => return Ok(GameEnd::Quit),
                    Ok(Command::Place(location)) => match game.player_move(location) {
                        Ok(()) => {
                            log!("{} played location {}", player_name, location);
                            writeln!(output, "{}", game.board())?;
                            turn = Turn::Computer;
                        }
                        Err(e) => writeln!(output, "Illegal move: {}", e)?,
                    },
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            Turn::Computer => {
                let location = game
                    .play_computer_move()
                    .map_err(|e| io::Error::other(e.to_string()))?;
                writeln!(output, "Computer plays {}", location)?;
                writeln!(output, "{}", game.board())?;
                turn = Turn::Player;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectn_engine::four_in_a_row::{Cell, EngineSettings, PlayerColor};
    use std::io::Cursor;

    fn seeded_game() -> FourInARow {
        FourInARow::from_settings(EngineSettings {
            seed: Some(5),
            ..EngineSettings::default()
        })
        .unwrap()
    }

    fn play(game: &mut FourInARow, first: Turn, script: &str) -> (GameEnd, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let end = run_game(game, first, "Ada", &mut input, &mut output).unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_command_forms() {
        assert_eq!(parse_command("7\n"), Ok(Command::Place(7)));
        assert_eq!(parse_command(" 2 3 "), Ok(Command::Place(15)));
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
        assert_eq!(parse_command("quit\n"), Ok(Command::Quit));
        assert_eq!(parse_command("40"), Ok(Command::Place(40)));
        assert!(parse_command("6 0").is_err());
        assert!(parse_command("abc").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("").is_err());
    }

    #[test]
    fn test_player_completes_line_and_wins() {
        let mut game = seeded_game();
        for location in [0, 1, 2] {
            game.set_move(PlayerColor::Red, location).unwrap();
        }

        let (end, output) = play(&mut game, Turn::Player, "3\n");
        assert_eq!(end, GameEnd::Finished(Outcome::RedWon));
        assert!(output.contains("Ada wins!"));
        assert!(output.contains("Winning line: [0, 1, 2, 3]"));
    }

    #[test]
    fn test_computer_takes_winning_move() {
        let mut game = seeded_game();
        for location in [0, 1, 2] {
            game.set_move(PlayerColor::Red, location).unwrap();
        }
        for location in [30, 31, 32] {
            game.set_move(PlayerColor::Blue, location).unwrap();
        }

        let (end, output) = play(&mut game, Turn::Computer, "");
        assert_eq!(end, GameEnd::Finished(Outcome::BlueWon));
        assert!(output.contains("Computer plays 33"));
        assert!(output.contains("Computer (Blue) wins."));
    }

    #[test]
    fn test_bad_input_is_reported_and_board_unchanged() {
        let mut game = seeded_game();
        game.set_move(PlayerColor::Blue, 4).unwrap();
        let before = *game.board();

        let (end, output) = play(&mut game, Turn::Player, "abc\n40\n4\nq\n");
        assert_eq!(end, GameEnd::Quit);
        assert!(output.contains("Invalid location 'abc'"));
        assert!(output.contains("Illegal move: location 40 is outside the board"));
        assert!(output.contains("Illegal move: location 4 is already occupied"));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut game = seeded_game();
        let (end, _) = play(&mut game, Turn::Player, "");
        assert_eq!(end, GameEnd::Quit);
    }

    #[test]
    fn test_computer_answers_each_player_move() {
        let mut game = seeded_game();
        let (end, output) = play(&mut game, Turn::Player, "0 0\nq\n");

        assert_eq!(end, GameEnd::Quit);
        assert_eq!(game.cell_at(0), Some(Cell::Red));
        assert_eq!(game.board().empty_locations().len(), 34);
        assert_eq!(output.matches("Computer plays").count(), 1);
    }
}
