//! hl7map - HL7 v2 (ER7) messages as nested key-value maps
//!
//! # Quick Start
//!
//! ```
//! use hl7map::{message_to_map, Naming, Value};
//! # fn main() -> Result<(), hl7map::Error> {
//! let raw = "MSH|^~\\&|LAB|HOSP|EHR|HOSP|202501010101||ORU^R01|MSG0001|P|2.5\r\
//!            PID|1||12345^^^HOSP^MR||Doe^Jane";
//! let map = Value::Object(message_to_map(raw, Naming::Long)?);
//! let family = map
//!     .get_path(["PID", "PATIENT_NAME", "FAMILY_NAME"])
//!     .and_then(Value::as_string)
//!     .unwrap_or_default();
//! assert_eq!(family, "Doe");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Pos, Result, Span};

pub mod node;
pub use node::{Content, Message, Node};

pub mod value;
pub use value::{Array, Object, Value};

pub mod dictionary;
pub mod er7;
pub use er7::{Config, Delimiters, Parser};

pub mod convert;
pub use convert::{chosen_name, convert, message_to_map, ConvertOptions, Naming};

#[cfg(feature = "serde")]
pub mod json;
#[cfg(feature = "serde")]
pub use json::{message_to_json, to_json, JsonStyle};

#[cfg(feature = "pipeline")]
pub mod pipeline;
#[cfg(feature = "pipeline")]
pub use pipeline::{process_dir, process_file, PipelineConfig, PipelineError, Report};

/// Parse an ER7 message from a string
pub fn parse(s: &str) -> Result<Message> {
    let mut parser = Parser::new(s.as_bytes());
    parser.parse()
}

/// Parse an ER7 message from bytes
pub fn parse_bytes(bytes: &[u8]) -> Result<Message> {
    let mut parser = Parser::new(bytes);
    parser.parse()
}

/// Parse with custom configuration
pub fn parse_with_config(s: &str, config: Config) -> Result<Message> {
    let mut parser = Parser::with_config(s.as_bytes(), config);
    parser.parse()
}
