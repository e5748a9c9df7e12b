//! Error types for hl7map

use std::fmt;
use thiserror::Error;

/// Position in source text
///
/// `line` counts segments (1-based), `col` counts bytes within the segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Span representing a range in source text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    pub const fn new(start: Pos, end: Pos) -> Self {
        Self { start, end }
    }

    pub const fn empty() -> Self {
        Self {
            start: Pos::new(0, 0, 0),
            end: Pos::new(0, 0, 0),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input contained no segments
    EmptyMessage,
    InvalidUtf8,
    /// First segment is not `MSH`
    MissingHeader { found: String },
    /// MSH delimiters are missing, short or ambiguous
    InvalidEncoding,
    /// Segment id is not three uppercase letters or digits
    InvalidSegmentName { name: String },
    MaxSizeExceeded { max: usize },
    MaxDepthExceeded { max: u16 },
    /// A tree node is neither a usable leaf nor a branch with children
    ContractViolation { node: String },
    /// Rendering a converted message failed
    Serialize { reason: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "empty message"),
            Self::InvalidUtf8 => write!(f, "invalid utf-8"),
            Self::MissingHeader { found } => {
                write!(f, "expected MSH header segment, found {found}")
            }
            Self::InvalidEncoding => write!(f, "invalid encoding characters"),
            Self::InvalidSegmentName { name } => write!(f, "invalid segment name: {name}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::ContractViolation { node } => {
                write!(f, "node {node} has neither children nor a leaf value")
            }
            Self::Serialize { reason } => write!(f, "serialization failed: {reason}"),
        }
    }
}

impl ErrorKind {
    /// Returns true for errors raised because the raw text is not valid ER7
    pub const fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyMessage
                | Self::InvalidUtf8
                | Self::MissingHeader { .. }
                | Self::InvalidEncoding
                | Self::InvalidSegmentName { .. }
                | Self::MaxSizeExceeded { .. }
        )
    }
}

/// Main error type for hl7map
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    span: Span,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            span,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create error at specific position
    pub fn at(kind: ErrorKind, offset: usize, line: u32, col: u32) -> Self {
        let pos = Pos::new(offset, line, col);
        Self::new(kind, Span::new(pos, pos))
    }

    /// Create error with no source position (tree-level failures)
    pub fn detached(kind: ErrorKind) -> Self {
        Self::new(kind, Span::empty())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span == Span::empty() {
            write!(f, "error: {}", self.message)
        } else {
            write!(f, "error at {}: {}", self.span.start, self.message)
        }
    }
}

/// Result type alias for hl7map
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_display() {
        let pos = Pos::new(42, 10, 5);
        assert_eq!(pos.to_string(), "42:10:5");
    }

    #[test]
    fn test_error_creation() {
        let err = Error::at(ErrorKind::InvalidEncoding, 0, 1, 4);
        assert_eq!(err.kind(), &ErrorKind::InvalidEncoding);
        assert_eq!(err.span().start.col, 4);
    }

    #[test]
    fn test_error_display() {
        let name = "pid".to_string();
        let err = Error::at(ErrorKind::InvalidSegmentName { name }, 10, 2, 1);
        let display = err.to_string();
        assert!(display.contains("error at"));
        assert!(display.contains("invalid segment name: pid"));
    }

    #[test]
    fn test_detached_error_display() {
        let node = "PID".to_string();
        let err = Error::detached(ErrorKind::ContractViolation { node });
        assert_eq!(
            err.to_string(),
            "error: node PID has neither children nor a leaf value"
        );
    }

    #[test]
    fn test_malformed_input_classification() {
        assert!(ErrorKind::EmptyMessage.is_malformed_input());
        assert!(ErrorKind::InvalidEncoding.is_malformed_input());
        assert!(!ErrorKind::MaxDepthExceeded { max: 4 }.is_malformed_input());
        let node = "X".to_string();
        assert!(!ErrorKind::ContractViolation { node }.is_malformed_input());
    }
}
