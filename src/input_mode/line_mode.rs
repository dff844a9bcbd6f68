use super::{InputStrategy, Outcome};
use crate::scanner::{Scan, Scanner};
use std::io::{self, BufRead};

/// Reads one whole line per expression and tokenizes it on its own. A bad
/// line is thrown away in full.
pub struct LineBased;

impl<R: BufRead> InputStrategy<R> for LineBased {
    fn next(&mut self, scanner: &mut Scanner<R>) -> io::Result<Outcome> {
        let line = match scanner.read_line()? {
            Some(line) => line,
            None => return Ok(Outcome::Quit),
        };
        if line == "q" {
            return Ok(Outcome::Quit);
        }
        Ok(parse_line(&line))
    }

    fn invalid_message(&self) -> &'static str {
        "Invalid input format. Please try again."
    }
}

/// Text after the second operand is ignored.
pub fn parse_line(line: &str) -> Outcome {
    let mut tokens = Scanner::new(line.as_bytes());
    match tokens.read_triple() {
        Ok(Scan::Got((a, op, b))) => Outcome::Triple(a, op, b),
        _ => Outcome::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_mode::tests::run;
    use crate::input_mode::Mode;

    #[test]
    fn parses_lines() {
        assert_eq!(parse_line("3 + 4"), Outcome::Triple(3.0, '+', 4.0));
        assert_eq!(parse_line("  2.5*-2 "), Outcome::Triple(2.5, '*', -2.0));
        assert_eq!(parse_line("1 / 2 trailing"), Outcome::Triple(1.0, '/', 2.0));
        assert_eq!(parse_line("1 ^ 2"), Outcome::Triple(1.0, '^', 2.0));
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in ["", "3 +", "abc", "3 + x", "+ 3 4", "q q"] {
            assert_eq!(parse_line(line), Outcome::Invalid, "{:?}", line);
        }
    }

    #[test]
    fn bad_line_is_discarded_whole() {
        let (exprs, _, err) = run(Mode::LineBased, "3 + oops\n6 / 3\nq\n");
        assert_eq!(exprs, vec!["6 / 3"]);
        assert_eq!(err, "Invalid input format. Please try again.\n");
    }

    #[test]
    fn quit_must_be_the_whole_line() {
        let (exprs, _, err) = run(Mode::LineBased, " q\nquit\nq\n1 + 1\n");
        assert!(exprs.is_empty());
        assert_eq!(err.lines().count(), 2);
    }

    #[test]
    fn end_of_input_stops() {
        let (exprs, _, err) = run(Mode::LineBased, "8 - 3");
        assert_eq!(exprs, vec!["8 - 3"]);
        assert!(err.is_empty());
    }
}
