/// A byte cursor over template source.
///
/// Only ever stops on ASCII delimiters, so every position it reports while
/// scanning for `{{`, `{%`, `}}` or `%}` is a valid char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The template source being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte offset.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of source.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes, stopping at end of source.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Advances until `pat` is at the cursor or input runs out.
    /// Returns true if `pat` was found.
    pub fn skip_until(&mut self, pat: &[u8]) -> bool {
        while !self.eof() {
            if self.starts_with(pat) {
                return true;
            }
            self.bump();
        }
        false
    }
}
