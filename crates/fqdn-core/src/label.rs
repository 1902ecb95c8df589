//! Dot-delimited label views over an input string.

use std::fmt;
use std::iter::FusedIterator;

/// Maximum length of a whole name, dots included.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a single label.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Label separator.
pub const SEPARATOR: u8 = b'.';

/// One label of a name, borrowed from the source string as `(start, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    source: &'a str,
    start: usize,
    len: usize,
    last: bool,
}

impl<'a> Label<'a> {
    /// Byte offset of the label within the source string.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether no separator follows this label.
    pub const fn is_last(&self) -> bool {
        self.last
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.start..self.start + self.len]
    }

    /// Labels never split a UTF-8 sequence because `.` is ASCII.
    pub fn as_str(&self) -> &'a str {
        &self.source[self.start..self.start + self.len]
    }

    pub fn first_byte(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    pub fn last_byte(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }
}

impl fmt::Display for Label<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forward-only scan yielding every label, empty ones included.
///
/// Joining the yielded labels with `.` gives back the source string.
#[derive(Debug, Clone)]
pub struct Labels<'a> {
    source: &'a str,
    next_start: Option<usize>,
}

impl<'a> Labels<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            next_start: Some(0),
        }
    }
}

impl<'a> Iterator for Labels<'a> {
    type Item = Label<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start?;
        let rest = &self.source.as_bytes()[start..];

        let label = match rest.iter().position(|&b| b == SEPARATOR) {
            Some(offset) => {
                self.next_start = Some(start + offset + 1);
                Label {
                    source: self.source,
                    start,
                    len: offset,
                    last: false,
                }
            }
            None => {
                self.next_start = None;
                Label {
                    source: self.source,
                    start,
                    len: rest.len(),
                    last: true,
                }
            }
        };

        Some(label)
    }
}

impl FusedIterator for Labels<'_> {}

/// Split `source` into labels.
pub const fn labels(source: &str) -> Labels<'_> {
    Labels::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        labels(source).map(|l| l.as_str()).collect()
    }

    #[test]
    fn splits_on_dots() {
        assert_eq!(texts("www.example.com"), ["www", "example", "com"]);
        assert_eq!(texts("localhost"), ["localhost"]);
    }

    #[test]
    fn yields_empty_labels() {
        assert_eq!(texts("a..b"), ["a", "", "b"]);
        assert_eq!(texts("example.com."), ["example", "com", ""]);
        assert_eq!(texts(""), [""]);
    }

    #[test]
    fn offsets_and_last_flag() {
        let all: Vec<_> = labels("ab.cde").collect();
        assert_eq!((all[0].start(), all[0].len(), all[0].is_last()), (0, 2, false));
        assert_eq!((all[1].start(), all[1].len(), all[1].is_last()), (3, 3, true));
        assert_eq!(all[1].first_byte(), Some(b'c'));
        assert_eq!(all[1].last_byte(), Some(b'e'));
    }

    #[test]
    fn labels_reconstruct_source() {
        for source in ["a.b.c", "sub..example.com", ".lead", "trail.", "..", "x"] {
            let joined = texts(source).join(".");
            assert_eq!(joined, source);
        }
    }
}
