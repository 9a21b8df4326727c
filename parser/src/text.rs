/// A random-access source of characters that can be parsed as a number.
///
/// Byte-oriented sources (`str`, `[u8]`) are indexed by byte offset and each byte is read as a
/// Latin-1 character. Every valid digit is ASCII, so a multi-byte UTF-8 sequence never forms one.
pub trait Text {
    /// The number of addressable characters.
    fn len(&self) -> usize;

    /// The character at `index`. Callers guarantee `index < self.len()`.
    fn char_at(&self, index: usize) -> char;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Text for str {
    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        char::from(self.as_bytes()[index])
    }
}

impl Text for String {
    #[inline]
    fn len(&self) -> usize {
        String::len(self)
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        char::from(self.as_bytes()[index])
    }
}

impl Text for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        char::from(self[index])
    }
}

impl Text for [char] {
    #[inline]
    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    #[inline]
    fn char_at(&self, index: usize) -> char {
        self[index]
    }
}
