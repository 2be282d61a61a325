use std::io::{self, BufRead, Write};

use gol::CellId;
use thiserror::Error;

/// Typing one of these ends the list of live cells.
pub const SENTINELS: [&str; 3] = ["stop", "Stop", "q"];

#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("input ended before the grid was configured")]
    Eof,
    #[error(transparent)]
    Grid(#[from] gol::Error),
}

/// Asks questions on `output` and reads the answers line by line from
/// `input`, asking again until an answer is acceptable.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn positive(&mut self, question: &str, complaint: &str) -> Result<usize, PromptError> {
        loop {
            match self.ask(question)?.parse::<usize>() {
                Ok(n) if n > 0 => return Ok(n),
                _ => self.say(complaint)?,
            }
        }
    }

    /// Reads live cell identifiers until a sentinel. Out of range or
    /// malformed answers are rejected one at a time.
    pub fn alive_ids(&mut self, max: usize) -> Result<Vec<CellId>, PromptError> {
        let mut ids = vec![];
        loop {
            let answer = self.ask(
                "Please either enter one number (integer) or type 'Stop' to continue the program: ",
            )?;
            if SENTINELS.contains(&answer.as_str()) {
                log::debug!("{} live cells entered", ids.len());
                return Ok(ids);
            }
            match answer.parse::<usize>() {
                Ok(id) if (1..=max).contains(&id) => ids.push(CellId(id)),
                _ => self.say("Please enter a valid input. ")?,
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(line.trim().to_string())
    }
}
