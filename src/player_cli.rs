#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::string::String;

use rand::Rng;

use crate::{
    common::{BoardError, GameError, InputError},
    coord::Coordinate,
    grid::Grid,
    player::Player,
};

/// Parse a typed target: two whitespace-separated 1-based numbers, row
/// first. Bounds are checked later by the grid; numbers too large for a
/// coordinate saturate so they still land off the board.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let mut tokens = line.split_whitespace();
    let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(InputError::WrongTokenCount);
    };
    let row = parse_index(row)?;
    let col = parse_index(col)?;
    Ok(Coordinate::new(row - 1, col - 1))
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    let value: u64 = token.parse().unwrap_or(u64::MAX);
    Ok(i32::try_from(value).unwrap_or(i32::MAX))
}

/// Human player typing targets on a line-based input.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the player, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    // console write failures are not worth ending a game over
    fn say(&mut self, msg: &str) {
        let _ = writeln!(self.output, "{}", msg);
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target<G: Rng + ?Sized>(
        &mut self,
        _rng: &mut G,
        _target: &Grid,
    ) -> Result<Coordinate, GameError> {
        loop {
            let _ = write!(self.output, "Your move: ");
            let _ = self.output.flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(GameError::InputClosed),
                Ok(_) => {}
            }
            match parse_target(&line) {
                Ok(p) => return Ok(p),
                Err(e) => {
                    log::debug!("rejected input {:?}: {:?}", line.trim_end(), e);
                    self.say(&std::format!(" {} ", e));
                }
            }
        }
    }

    fn report_rejected(&mut self, _at: Coordinate, err: &BoardError) {
        self.say(&std::format!("{}", err));
    }
}
