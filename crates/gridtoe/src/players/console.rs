//! Human player reading coordinates from a text stream.

use super::Player;
use anyhow::Result;
use gridtoe_core::{Board, Coord, Marker};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Human player prompting for `Row:` and `Column:` on a text console.
pub struct ConsolePlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Creates a console player over the given streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Prompts until a whole number or a quit command is entered.
    #[instrument(skip(self))]
    fn read_index(&mut self, prompt: &str, size: usize) -> Result<Option<usize>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input closed");
            }

            let answer = line.trim();
            if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
                debug!("Quit requested");
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(index) => return Ok(Some(index)),
                Err(_) => {
                    debug!(answer, "Unparsable coordinate");
                    writeln!(
                        self.output,
                        "Please enter a number from 0 to {}, or q to quit.",
                        size.saturating_sub(1)
                    )?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn next_move(&mut self, board: &Board, _marker: Marker) -> Result<Option<Coord>> {
        let Some(row) = self.read_index("Row: ", board.size())? else {
            return Ok(None);
        };
        let Some(col) = self.read_index("Column: ", board.size())? else {
            return Ok(None);
        };
        Ok(Some(Coord::new(row, col)))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn retries_rejected_moves(&self) -> bool {
        true
    }
}
