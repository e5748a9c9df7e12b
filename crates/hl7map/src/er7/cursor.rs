//! Segment cursor for ER7 input

use crate::error::Pos;

/// MLLP start-of-block byte
const START_BLOCK: u8 = 0x0b;
/// MLLP end-of-block byte
const END_BLOCK: u8 = 0x1c;

/// Cursor walking an ER7 message segment by segment
///
/// `line` is the 1-based number of the current segment, `col` the 1-based
/// byte column inside it.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    /// Create cursor from message text
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Get current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Advance cursor by one byte within a segment
    pub fn advance(&mut self) {
        if self.current().is_some() {
            self.pos += 1;
            self.col += 1;
        }
    }

    /// Skip segment terminators, whitespace and MLLP framing between segments
    ///
    /// Moving past a terminator that ends a segment starts a new line.
    pub fn skip_separators(&mut self) {
        let mut crossed = false;
        while let Some(b) = self.current() {
            match b {
                b'\r' | b'\n' => crossed = true,
                b' ' | b'\t' | START_BLOCK | END_BLOCK => {}
                _ => break,
            }
            self.pos += 1;
        }
        if crossed && self.pos > 0 {
            self.line += 1;
        }
        self.col = 1;
    }

    /// Consume the next segment, returning its start position and text
    pub fn next_segment(&mut self) -> Option<(Pos, &'a str)> {
        if self.pos == 0 {
            self.skip_leading();
        } else {
            self.skip_separators();
        }
        if self.is_eof() {
            return None;
        }

        let start_pos = self.position();
        let start = self.pos;
        while let Some(b) = self.current() {
            if matches!(b, b'\r' | b'\n' | END_BLOCK) {
                break;
            }
            self.advance();
        }
        Some((start_pos, self.slice_from(start)))
    }

    fn skip_leading(&mut self) {
        while let Some(b) = self.current() {
            if matches!(b, b' ' | b'\t' | b'\r' | b'\n' | START_BLOCK) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Get current position
    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get text from start to current position
    ///
    /// Segments are only cut at ASCII bytes, so the range is always on a
    /// char boundary.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_basic() {
        let mut cursor = Cursor::new("MSH|");
        assert_eq!(cursor.current(), Some(b'M'));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'S'));
        assert_eq!(cursor.position().col, 2);
    }

    #[test]
    fn test_segments_split_on_any_terminator() {
        let mut cursor = Cursor::new("MSH|a\rPID|b\nPV1|c\r\nOBX|d");
        let segments: Vec<_> = std::iter::from_fn(|| cursor.next_segment())
            .map(|(pos, text)| (pos.line, text))
            .collect();
        assert_eq!(
            segments,
            vec![(1, "MSH|a"), (2, "PID|b"), (3, "PV1|c"), (4, "OBX|d")]
        );
    }

    #[test]
    fn test_blank_segments_and_framing_skipped() {
        let mut cursor = Cursor::new("\u{b}MSH|a\r\r\rPID|b\r\u{1c}\r");
        let texts: Vec<_> = std::iter::from_fn(|| cursor.next_segment())
            .map(|(_, text)| text)
            .collect();
        assert_eq!(texts, vec!["MSH|a", "PID|b"]);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_eof() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), None);
        assert!(cursor.next_segment().is_none());
    }

    #[test]
    fn test_cursor_slice() {
        let mut cursor = Cursor::new("PID|1");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.slice_from(0), "PID");
    }
}
