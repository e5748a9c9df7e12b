//! Message delimiters declared in the MSH header

use crate::error::{Error, ErrorKind, Pos, Result, Span};

/// Separator characters for one message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delimiters {
    pub field: char,
    pub component: char,
    pub repetition: char,
    pub escape: char,
    pub subcomponent: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            field: '|',
            component: '^',
            repetition: '~',
            escape: '\\',
            subcomponent: '&',
        }
    }
}

impl Delimiters {
    /// Read delimiters from the text of an MSH segment
    ///
    /// The byte after `MSH` is the field separator; the next four characters
    /// are component, repetition, escape and subcomponent separators. A fifth
    /// encoding character (the v2.7 truncation character) is tolerated.
    pub fn from_header(segment: &str, at: Pos) -> Result<Self> {
        let invalid = |col: u32, message: &str| {
            let pos = Pos::new(at.offset, at.line, col);
            Error::with_message(ErrorKind::InvalidEncoding, Span::new(pos, pos), message)
        };

        let mut chars = segment.chars().skip(3);
        let field = chars
            .next()
            .ok_or_else(|| invalid(4, "MSH segment too short to declare a field separator"))?;

        let encoding: Vec<char> = chars.take_while(|&c| c != field).collect();
        let (component, repetition, escape, subcomponent) = match encoding.as_slice() {
            [c, r, e, s] | [c, r, e, s, _] => (*c, *r, *e, *s),
            _ => {
                return Err(invalid(
                    5,
                    "MSH encoding characters must be four or five characters",
                ))
            }
        };

        let delimiters = Self {
            field,
            component,
            repetition,
            escape,
            subcomponent,
        };
        let all = delimiters.as_array();
        for (i, c) in all.iter().enumerate() {
            if c.is_alphanumeric() || c.is_whitespace() {
                return Err(invalid(4, "delimiters must be punctuation characters"));
            }
            if all.iter().skip(i + 1).any(|other| other == c) {
                return Err(invalid(4, "delimiters must be distinct"));
            }
        }

        Ok(delimiters)
    }

    /// The MSH-2 encoding characters in declaration order
    pub fn encoding_characters(&self) -> String {
        [self.component, self.repetition, self.escape, self.subcomponent]
            .iter()
            .collect()
    }

    const fn as_array(&self) -> [char; 5] {
        [
            self.field,
            self.component,
            self.repetition,
            self.escape,
            self.subcomponent,
        ]
    }
}
