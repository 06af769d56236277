use std::str::Chars;

pub(crate) const EOF_CHAR: char = '\0';

#[derive(Clone)]
pub(crate) struct Cursor<'a> {
    chars: Chars<'a>,
    len: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { chars: text.chars(), len: text.len() }
    }

    /// Byte offset of the next character.
    pub(crate) fn pos(&self) -> usize {
        self.len - self.chars.as_str().len()
    }

    pub(crate) fn rest(&self) -> &'a str {
        self.chars.as_str()
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    pub(crate) fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    pub(crate) fn advance(&mut self) -> char {
        self.chars.next().unwrap_or(EOF_CHAR)
    }

    /// Skips `n` bytes. `n` must land on a char boundary of the remaining text.
    pub(crate) fn bump(&mut self, n: usize) {
        let rest = self.chars.as_str();
        self.chars = rest[n.min(rest.len())..].chars();
    }
}
