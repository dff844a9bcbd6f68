use super::{InputStrategy, Outcome};
use crate::scanner::{Scan, Scanner};
use std::io::{self, BufRead};
use tracing::trace;

/// Reads operands and the operator straight off the input stream, so an
/// expression may span several lines and several expressions may share one.
pub struct TokenStream;

impl<R: BufRead> InputStrategy<R> for TokenStream {
    fn next(&mut self, scanner: &mut Scanner<R>) -> io::Result<Outcome> {
        match scanner.read_triple()? {
            Scan::Got((a, op, b)) => Ok(Outcome::Triple(a, op, b)),
            Scan::End => Ok(Outcome::Quit),
            Scan::Mismatch => {
                // Drop the offending line, then the first character of the
                // next token decides whether to quit, so `quit` works too.
                scanner.ignore_line()?;
                match scanner.read_word()? {
                    Scan::Got(word) if word.starts_with('q') => Ok(Outcome::Quit),
                    Scan::Got(word) => {
                        trace!(%word, "not a quit signal");
                        scanner.ignore_line()?;
                        Ok(Outcome::Invalid)
                    }
                    Scan::Mismatch | Scan::End => Ok(Outcome::Quit),
                }
            }
        }
    }

    fn invalid_message(&self) -> &'static str {
        "Invalid input. Please try again."
    }
}
