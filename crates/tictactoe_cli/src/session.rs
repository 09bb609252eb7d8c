//! Line-oriented play session driving one engine.

use crate::render::render;
use crate::settings::Settings;
use anyhow::{Context, Result, anyhow};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_engine::{GameEngine, Position};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <row> <column>   place a mark, rows and columns are 0-2 (also <row>,<column>)
  <1-9>            place a mark on the numbered cell
  <label>          place a mark by name, e.g. center or top-left
  reset            start a new game
  show             print the board
  help             print this help
  quit             leave";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Place at raw coordinates; the engine checks bounds.
    Place {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
    /// Place at a named or numbered position.
    At(Position),
    /// Start over.
    Reset,
    /// Print the board.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.to_lowercase().as_str() {
            "" => return Err(CommandError::new("Empty command")),
            "reset" | "new" => return Ok(Self::Reset),
            "show" | "board" => return Ok(Self::Show),
            "help" | "?" => return Ok(Self::Help),
            "quit" | "exit" | "q" => return Ok(Self::Quit),
            _ => {}
        }

        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        if let [row, column] = parts.as_slice()
            && let (Ok(row), Ok(column)) = (row.parse::<usize>(), column.parse::<usize>())
        {
            return Ok(Self::Place { row, column });
        }

        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Position::from_index)
                .map(Self::At)
                .ok_or_else(|| CommandError::new(format!("No cell numbered {}", number)));
        }

        Position::from_label_or_number(input)
            .map(Self::At)
            .ok_or_else(|| CommandError::new(format!("Unrecognized command: {}", input)))
    }
}

/// Input that could not be turned into a command.
#[derive(Debug, Clone, Display, Error)]
#[display("Command error: {} at {}:{}", message, file, line)]
pub struct CommandError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CommandError {
    /// Creates a new command error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// What the session wants the caller to do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading.
    Continue(String),
    /// Print the text and stop.
    Quit(String),
}

/// One player's seat at one game: owns the engine for its lifetime.
#[derive(Debug)]
pub struct PlaySession {
    engine: GameEngine,
    settings: Settings,
}

impl PlaySession {
    /// Creates a session with a fresh game.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        Self {
            engine: GameEngine::new(),
            settings,
        }
    }

    /// Returns the engine, for inspection.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The current board and turn/result text.
    pub fn render(&self) -> String {
        render(&self.engine, &self.settings)
    }

    /// Handles one line of input.
    ///
    /// Rejected moves and unknown commands are reported in the reply; the
    /// game is left as it was.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, "Unparsed input");
                return Reply::Continue(format!("{}. Type 'help' for commands.", err.message));
            }
        };

        let result = match command {
            SessionCommand::Place { row, column } => self.engine.apply_move(row, column),
            SessionCommand::At(pos) => self.engine.place(pos),
            SessionCommand::Reset => {
                self.engine.reset();
                return Reply::Continue(self.render());
            }
            SessionCommand::Show => return Reply::Continue(self.render()),
            SessionCommand::Help => return Reply::Continue(HELP.to_string()),
            SessionCommand::Quit => return Reply::Quit("Bye.".to_string()),
        };

        match result {
            Ok(_) => Reply::Continue(self.render()),
            Err(err) => {
                warn!(kind = %err.kind(), "Move not allowed");
                Reply::Continue(format!("Move not allowed: {}.", err.kind()))
            }
        }
    }

    /// Reads commands from `input` until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        info!("Session started");
        writeln!(output, "Tic Tac Toe\n\n{}\n", self.render())?;
        for line in input.lines() {
            match self.handle_line(&line?) {
                Reply::Continue(text) => writeln!(output, "{}\n", text)?,
                Reply::Quit(text) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
            }
        }
        info!(moves = self.engine.history().len(), "Session ended");
        Ok(())
    }
}

/// Plays each token as a move, in order, on a fresh game.
///
/// Tokens are anything [`SessionCommand`] parses as a move, e.g. `1,1`,
/// `5`, or `center`.
#[instrument]
pub fn replay(tokens: &[String]) -> Result<GameEngine> {
    let mut engine = GameEngine::new();
    for (index, token) in tokens.iter().enumerate() {
        let command: SessionCommand = token
            .parse()
            .with_context(|| format!("move {} ({:?})", index + 1, token))?;
        let result = match command {
            SessionCommand::Place { row, column } => engine.apply_move(row, column),
            SessionCommand::At(pos) => engine.place(pos),
            other => {
                return Err(anyhow!(
                    "move {} ({:?}): {:?} is not a move",
                    index + 1,
                    token,
                    other
                ));
            }
        };
        result.map_err(|err| anyhow!("move {} ({:?}): {}", index + 1, token, err.kind()))?;
    }
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{GameStatus, Player};

    #[test]
    fn test_parse_coordinates() {
        let place = |row, column| SessionCommand::Place { row, column };
        assert_eq!("1 2".parse::<SessionCommand>().unwrap(), place(1, 2));
        assert_eq!("0,0".parse::<SessionCommand>().unwrap(), place(0, 0));
        assert_eq!(" 2, 1 ".parse::<SessionCommand>().unwrap(), place(2, 1));
    }

    #[test]
    fn test_parse_cell_number_and_label() {
        assert_eq!("5".parse::<SessionCommand>().unwrap(), SessionCommand::At(Position::Center));
        assert_eq!("1".parse::<SessionCommand>().unwrap(), SessionCommand::At(Position::TopLeft));
        assert_eq!(
            "Bottom right".parse::<SessionCommand>().unwrap(),
            SessionCommand::At(Position::BottomRight)
        );
        assert!("0".parse::<SessionCommand>().is_err());
        assert!("10".parse::<SessionCommand>().is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("RESET".parse::<SessionCommand>().unwrap(), SessionCommand::Reset);
        assert_eq!("q".parse::<SessionCommand>().unwrap(), SessionCommand::Quit);
        assert!("".parse::<SessionCommand>().is_err());
        assert!("jump".parse::<SessionCommand>().is_err());
    }

    #[test]
    fn test_occupied_cell_reply_keeps_state() {
        let mut session = PlaySession::new(Settings::default());
        session.handle_line("1 1");
        let before = session.engine().clone();

        let reply = session.handle_line("center");

        assert_eq!(
            reply,
            Reply::Continue("Move not allowed: Center is already occupied.".to_string())
        );
        assert_eq!(session.engine(), &before);
    }

    #[test]
    fn test_off_board_reply() {
        let mut session = PlaySession::new(Settings::default());
        let reply = session.handle_line("3 0");
        assert_eq!(
            reply,
            Reply::Continue("Move not allowed: (3, 0) is off the board.".to_string())
        );
    }

    #[test]
    fn test_replay_reports_bad_move() {
        let tokens = vec!["1,1".to_string(), "center".to_string()];
        let err = replay(&tokens).unwrap_err();
        assert!(err.to_string().contains("move 2"), "{err}");
        assert!(err.to_string().contains("already occupied"), "{err}");
    }

    #[test]
    fn test_replay_numbers_are_one_based_cells() {
        let engine = replay(&["8".to_string()]).unwrap();
        assert_eq!(engine.history()[0].position, Position::BottomCenter);

        let engine = replay(&["9".to_string()]).unwrap();
        assert_eq!(engine.history()[0].position, Position::BottomRight);
    }

    #[test]
    fn test_replay_rejects_cell_zero() {
        let err = replay(&["0".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("move 1"), "{err}");
        assert!(format!("{err:#}").contains("No cell numbered 0"), "{err:#}");
    }

    #[test]
    fn test_replay_rejects_non_move() {
        let err = replay(&["reset".to_string()]).unwrap_err();
        assert!(err.to_string().contains("is not a move"), "{err}");
    }

    #[test]
    fn test_replay_to_win() {
        let tokens: Vec<String> = ["0,0", "1,1", "0,1", "1,0", "0,2"].map(String::from).to_vec();
        let engine = replay(&tokens).unwrap();
        assert_eq!(engine.status().winner(), Some(Player::X));
        assert_ne!(engine.status(), GameStatus::InProgress);
    }
}
