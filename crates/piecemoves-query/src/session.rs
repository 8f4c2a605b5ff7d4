//! A synchronous query session: read commands, answer on the output stream.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use piecemoves_core::{Board, generate_moves};

use crate::command::{Command, parse_command};
use crate::error::QueryError;

/// Whether the session should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Query session state: the board every command operates on.
pub struct Session {
    board: Board,
}

impl Session {
    /// Create a session holding the starting position.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
        }
    }

    /// Create a session holding `board`.
    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// responses to `output`.
    ///
    /// Command errors are reported on `output` and do not end the session; only
    /// I/O failures do.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), QueryError> {
        info!("query session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let outcome = parse_command(trimmed).and_then(|cmd| self.execute(cmd, &mut output));
            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => break,
                Err(QueryError::Io { source }) => return Err(QueryError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }
        info!("query session finished");
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<Flow, QueryError> {
        match command {
            Command::StartPos => self.board = Board::starting_position(),
            Command::Empty => self.board = Board::empty(),
            Command::Fen(board) => self.board = board,
            Command::Put(square, piece) => {
                self.board.put_piece(square, piece);
            }
            Command::Remove(square) => {
                self.board.remove_piece(square);
            }
            Command::Moves(square) => {
                let moves = generate_moves(&self.board, square)?;
                write!(output, "moves")?;
                for mv in moves.iter() {
                    write!(output, " {mv}")?;
                }
                writeln!(output)?;
            }
            Command::Show => {
                writeln!(output, "{}", self.board.pretty())?;
                writeln!(output, "fen {}", self.board)?;
            }
            Command::Quit => return Ok(Flow::Stop),
            Command::Unknown(name) => {
                debug!(cmd = %name, "ignoring unknown command");
            }
        }
        Ok(Flow::Continue)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
