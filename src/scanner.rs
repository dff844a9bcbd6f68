use std::io::{self, BufRead};

/// Result of a single formatted read.
#[derive(Debug, PartialEq)]
pub enum Scan<T> {
    Got(T),
    /// The next token is not of the requested type.
    Mismatch,
    /// Input ran out before a token started.
    End,
}

/// Pulls whitespace separated numbers, characters and words out of a reader,
/// one buffered line at a time.
pub struct Scanner<R> {
    reader: R,
    raw: Vec<u8>,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            raw: Vec::new(),
            buf: String::new(),
            pos: 0,
        }
    }

    fn peek(&mut self) -> io::Result<Option<char>> {
        if self.pos >= self.buf.len() {
            self.raw.clear();
            self.pos = 0;
            if self.reader.read_until(b'\n', &mut self.raw)? == 0 {
                self.buf.clear();
                return Ok(None);
            }
            // bytes that are not UTF-8 become U+FFFD and fail as tokens
            self.buf = String::from_utf8_lossy(&self.raw).into_owned();
        }
        Ok(self.buf[self.pos..].chars().next())
    }

    fn bump(&mut self) {
        if let Some(c) = self.buf[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    /// Returns false when the input is exhausted.
    fn skip_whitespace(&mut self) -> io::Result<bool> {
        while let Some(c) = self.peek()? {
            if !c.is_whitespace() {
                return Ok(true);
            }
            self.bump();
        }
        Ok(false)
    }

    pub fn read_number(&mut self) -> io::Result<Scan<f64>> {
        if !self.skip_whitespace()? {
            return Ok(Scan::End);
        }

        let rest = &self.buf[self.pos..];
        let len = number_prefix_len(rest);
        if len == 0 {
            return Ok(Scan::Mismatch);
        }
        match rest[..len].parse::<f64>() {
            Ok(num) => {
                self.pos += len;
                Ok(Scan::Got(num))
            }
            Err(_) => Ok(Scan::Mismatch),
        }
    }

    pub fn read_char(&mut self) -> io::Result<Scan<char>> {
        if !self.skip_whitespace()? {
            return Ok(Scan::End);
        }
        match self.peek()? {
            Some(c) => {
                self.bump();
                Ok(Scan::Got(c))
            }
            None => Ok(Scan::End),
        }
    }

    pub fn read_word(&mut self) -> io::Result<Scan<String>> {
        if !self.skip_whitespace()? {
            return Ok(Scan::End);
        }
        let rest = &self.buf[self.pos..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let word = rest[..len].to_string();
        self.pos += len;
        Ok(Scan::Got(word))
    }

    /// Reads `operand operator operand`. Running out of input part way
    /// through counts as `End`.
    pub fn read_triple(&mut self) -> io::Result<Scan<(f64, char, f64)>> {
        let a = match self.read_number()? {
            Scan::Got(a) => a,
            Scan::Mismatch => return Ok(Scan::Mismatch),
            Scan::End => return Ok(Scan::End),
        };
        let op = match self.read_char()? {
            Scan::Got(op) => op,
            Scan::Mismatch => return Ok(Scan::Mismatch),
            Scan::End => return Ok(Scan::End),
        };
        let b = match self.read_number()? {
            Scan::Got(b) => b,
            Scan::Mismatch => return Ok(Scan::Mismatch),
            Scan::End => return Ok(Scan::End),
        };
        Ok(Scan::Got((a, op, b)))
    }

    /// Discards input up to and including the next newline.
    pub fn ignore_line(&mut self) -> io::Result<()> {
        while let Some(c) = self.peek()? {
            self.bump();
            if c == '\n' {
                break;
            }
        }
        Ok(())
    }

    /// Returns the rest of the current line without its terminator, or
    /// `None` once the input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.peek()?.is_none() {
            return Ok(None);
        }
        let mut line = self.buf[self.pos..].to_string();
        self.pos = self.buf.len();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

// [+-]? digits [. digits] [(e|E) [+-]? digits], with at least one mantissa digit.
fn number_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut digits = 0;
    let mut has_dot = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    while i < bytes.len() {
        match bytes[i] {
            b'.' if has_dot => break,
            b'.' => has_dot = true,
            b'0'..=b'9' => digits += 1,
            _ => break,
        }
        i += 1;
    }
    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}
