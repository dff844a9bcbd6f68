pub mod line_mode;
pub mod token_mode;

use crate::calc_engine::{format_number, CalcError, Expression};
use crate::scanner::{Scan, Scanner};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const PROMPT: &str = "Enter expression (operand1 operator operand2) or 'q' to quit: ";

/// What one pass of an input strategy produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Triple(f64, char, f64),
    Invalid,
    Quit,
}

/// A way of turning interactive input into operand/operator/operand triples.
pub trait InputStrategy<R: BufRead> {
    fn next(&mut self, scanner: &mut Scanner<R>) -> io::Result<Outcome>;

    fn invalid_message(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TokenStream,
    LineBased,
}

impl TryFrom<i64> for Mode {
    type Error = CalcError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Mode::TokenStream),
            2 => Ok(Mode::LineBased),
            other => Err(CalcError::InvalidModeSelection(other.to_string())),
        }
    }
}

impl Mode {
    pub fn strategy<R: BufRead>(self) -> Box<dyn InputStrategy<R>> {
        match self {
            Mode::TokenStream => Box::new(token_mode::TokenStream),
            Mode::LineBased => Box::new(line_mode::LineBased),
        }
    }
}

/// Console state for one run: the input scanner, where echoes and
/// diagnostics go, and every expression accepted so far.
pub struct Session<R, W, E> {
    scanner: Scanner<R>,
    out: W,
    err: E,
    expressions: Vec<Expression>,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(scanner: Scanner<R>, out: W, err: E) -> Self {
        Session {
            scanner,
            out,
            err,
            expressions: Vec::new(),
        }
    }

    /// Shows the mode menu and reads the choice. Anything that is not an
    /// integer reads as 0.
    pub fn read_choice(&mut self) -> io::Result<i64> {
        writeln!(self.out, "Choose input method:")?;
        writeln!(self.out, "1. Using stream extraction (>>)")?;
        writeln!(self.out, "2. Using getline and istringstream")?;
        write!(self.out, "Enter your choice: ")?;
        self.out.flush()?;

        let choice = match self.scanner.read_word()? {
            Scan::Got(word) => word.parse().unwrap_or(0),
            Scan::Mismatch | Scan::End => 0,
        };
        self.scanner.ignore_line()?;
        Ok(choice)
    }

    pub fn collect<S>(&mut self, strategy: &mut S) -> io::Result<()>
    where
        S: InputStrategy<R> + ?Sized,
    {
        loop {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;

            match strategy.next(&mut self.scanner)? {
                Outcome::Quit => break,
                Outcome::Invalid => {
                    debug!("rejected malformed input");
                    writeln!(self.err, "{}", strategy.invalid_message())?;
                }
                Outcome::Triple(a, op, b) => self.record(a, op, b)?,
            }
        }
        info!(count = self.expressions.len(), "input finished");
        Ok(())
    }

    fn record(&mut self, a: f64, op: char, b: f64) -> io::Result<()> {
        let expr = match Expression::build(a, op, b) {
            Ok(expr) => expr,
            Err(e) => {
                debug!(%e, op = %op, "expression not constructed");
                return writeln!(self.err, "Error evaluating expression: {}", e);
            }
        };

        self.expressions.push(expr.clone());
        debug!(
            operand1 = expr.operand1(),
            operator = %expr.operator(),
            operand2 = expr.operand2(),
            "recorded"
        );

        match expr.evaluate() {
            Ok(result) => writeln!(self.out, "{} = {}", expr, format_number(result)),
            Err(e) => writeln!(self.err, "Error evaluating expression: {}", e),
        }
    }

    pub fn finish(self) -> (Vec<Expression>, W, E) {
        (self.expressions, self.out, self.err)
    }
}
