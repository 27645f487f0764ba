use std::borrow::Cow;
use std::fmt;

/// Byte reported past the end of the input.
///
/// ASCII SUB never occurs in record content, so a peek that runs off the end
/// can never compare equal to a literal.
pub const END_OF_INPUT: u8 = 0x1A;

/// Immutable position in a borrowed input sequence
///
/// A cursor never touches the bytes it points into; every operation returns
/// a new cursor. Copies are independent, which is what lets alternation retry
/// from the same starting point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    source: &'code [u8],
    /// May equal or exceed `source.len()`, meaning end of input
    offset: usize,
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code [u8]) -> Self {
        Self::at(source, 0)
    }

    pub fn at(source: &'code [u8], offset: usize) -> Self {
        Cursor { source, offset }
    }

    /// The element at the current offset, or [`END_OF_INPUT`] past the end
    pub fn first(&self) -> u8 {
        self.source
            .get(self.offset)
            .copied()
            .unwrap_or(END_OF_INPUT)
    }

    /// Move one element forward; stays put once at the end
    pub fn rest(self) -> Self {
        if self.at_end() { self } else { self.advance(1) }
    }

    /// Move `n` elements forward without clamping to the input length
    pub fn advance(self, n: usize) -> Self {
        Cursor {
            source: self.source,
            offset: self.offset.saturating_add(n),
        }
    }

    /// Input length minus offset; negative once the cursor is past the end
    pub fn remaining_len(&self) -> isize {
        let len = self.source.len();
        if self.offset <= len {
            // Slice lengths never exceed isize::MAX
            (len - self.offset) as isize
        } else {
            isize::try_from(self.offset - len).map_or(isize::MIN, |past| -past)
        }
    }

    pub fn has_at_least(&self, size: usize) -> bool {
        let len = self.source.len();
        self.offset <= len && len - self.offset >= size
    }

    /// Look at the next `size` elements
    ///
    /// When fewer remain, returns whatever is left followed by
    /// [`END_OF_INPUT`], so a caller comparing against a fixed-length literal
    /// gets a clean mismatch instead of an out-of-range slice.
    pub fn peek(&self, size: usize) -> Cow<'code, [u8]> {
        let exact = self
            .offset
            .checked_add(size)
            .and_then(|end| self.source.get(self.offset..end));
        if let Some(window) = exact {
            return Cow::Borrowed(window);
        }
        let start = self.offset.min(self.source.len());
        let mut partial = self.source[start..].to_vec();
        partial.push(END_OF_INPUT);
        Cow::Owned(partial)
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn source(&self) -> &'code [u8] {
        self.source
    }
}

impl<'code> From<&'code [u8]> for Cursor<'code> {
    fn from(source: &'code [u8]) -> Self {
        Cursor::new(source)
    }
}

impl<'code> From<&'code str> for Cursor<'code> {
    fn from(source: &'code str) -> Self {
        Cursor::new(source.as_bytes())
    }
}

impl fmt::Display for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cursor(offset: {}, source: \"{}\")",
            self.offset,
            String::from_utf8_lossy(self.source)
        )
    }
}
