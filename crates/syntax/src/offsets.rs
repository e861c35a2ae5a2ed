//! Byte to character offset conversion.
//!
//! Tree-sitter reports UTF-8 byte offsets while editors address text by character.
//! For pure-ASCII sources the two coincide and no table is built.

use crate::TextRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetMap {
    /// `chars[b]` is the character index of byte `b`; `None` for ASCII sources.
    chars: Option<Vec<usize>>,
}

impl OffsetMap {
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self { chars: None };
        }

        let mut chars = Vec::with_capacity(text.len() + 1);
        for (char_index, ch) in text.chars().enumerate() {
            chars.extend(std::iter::repeat_n(char_index, ch.len_utf8()));
        }
        chars.push(text.chars().count());
        Self { chars: Some(chars) }
    }

    pub fn char_offset(&self, byte: usize) -> usize {
        match &self.chars {
            None => byte,
            Some(chars) => chars
                .get(byte)
                .or_else(|| chars.last())
                .copied()
                .unwrap_or(0),
        }
    }

    pub fn char_range(&self, bytes: std::ops::Range<usize>) -> TextRange {
        TextRange::new(self.char_offset(bytes.start), self.char_offset(bytes.end))
    }
}
