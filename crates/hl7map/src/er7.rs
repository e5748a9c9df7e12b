//! ER7 (pipe-delimited HL7 v2) parser module

pub mod cursor;
pub mod delimiters;
pub mod parser;

pub use delimiters::Delimiters;
pub use parser::{Config, Parser};
