//! ER7 parser implementation
//!
//! Builds a flat message tree: message → segments → fields → components →
//! subcomponents. Repeated fields become sibling nodes sharing one name.
//! Empty parts produce no node, and leaf text is kept exactly as it appears
//! on the wire (escape sequences are not decoded).

use tracing::{debug, trace};

use crate::dictionary::{self, FieldDef};
use crate::er7::cursor::Cursor;
use crate::er7::delimiters::Delimiters;
use crate::error::{Error, ErrorKind, Pos, Result, Span};
use crate::node::{Message, Node};

/// Root name used when MSH-9 carries no message type
const UNKNOWN_STRUCTURE: &str = "MESSAGE";

const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024;

/// Configuration for the ER7 parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl Config {
    /// Create a new config with no size limit
    pub const fn unlimited() -> Self {
        Self { max_size: 0 }
    }

    pub const fn new(max_size: usize) -> Self {
        Self { max_size }
    }
}

/// ER7 message parser
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a [u8],
    config: Config,
}

impl<'a> Parser<'a> {
    /// Create a new parser with default configuration
    pub const fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, Config::new(DEFAULT_MAX_SIZE))
    }

    /// Create a new parser with custom configuration
    pub const fn with_config(input: &'a [u8], config: Config) -> Self {
        Self { input, config }
    }

    /// Parse one message
    pub fn parse(&mut self) -> Result<Message> {
        if self.config.max_size > 0 && self.input.len() > self.config.max_size {
            return Err(Error::at(
                ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                },
                self.config.max_size,
                0,
                0,
            ));
        }

        let text = std::str::from_utf8(self.input).map_err(|e| {
            Error::at(ErrorKind::InvalidUtf8, e.valid_up_to(), 0, 0)
        })?;
        let mut cursor = Cursor::new(text);

        let Some((header_pos, header)) = cursor.next_segment() else {
            return Err(Error::at(ErrorKind::EmptyMessage, 0, 0, 0));
        };
        if !header.starts_with("MSH") {
            let found = header.chars().take(3).collect();
            return Err(Error::new(
                ErrorKind::MissingHeader { found },
                Span::new(header_pos, header_pos),
            ));
        }

        let delimiters = Delimiters::from_header(header, header_pos)?;
        debug!(?delimiters, "read message delimiters");

        let builder = TreeBuilder { delimiters };
        let mut segments = vec![builder.header(header)];
        while let Some((pos, segment)) = cursor.next_segment() {
            segments.push(builder.segment(segment, pos)?);
        }

        let structure = message_structure(header, &delimiters);
        debug!(structure, segments = segments.len(), "parsed message");

        Ok(Message {
            root: Node::branch(structure, segments),
            delimiters,
        })
    }
}

/// Derive the message structure (root name) from raw MSH-9
fn message_structure(header: &str, delimiters: &Delimiters) -> String {
    // MSH-9 is the ninth field after the segment id; MSH-1 is the separator itself
    let msh9 = header.split(delimiters.field).nth(8).unwrap_or_default();
    let mut parts = msh9.split(delimiters.component);
    let code = parts.next().unwrap_or_default();
    let trigger = parts.next().unwrap_or_default();
    let structure = parts.next().unwrap_or_default();

    match (code, trigger, structure) {
        (_, _, s) if !s.is_empty() => s.to_string(),
        (c, t, _) if !c.is_empty() && !t.is_empty() => format!("{c}_{t}"),
        (c, _, _) if !c.is_empty() => c.to_string(),
        _ => UNKNOWN_STRUCTURE.to_string(),
    }
}

fn is_segment_name(name: &str) -> bool {
    name.len() == 3
        && name
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

struct TreeBuilder {
    delimiters: Delimiters,
}

impl TreeBuilder {
    /// MSH: MSH-1 and MSH-2 are kept verbatim, never split
    fn header(&self, text: &str) -> Node {
        let mut parts = text.split(self.delimiters.field);
        parts.next();

        let mut children = vec![self.leaf_field("MSH", 1, self.delimiters.field.to_string())];
        if let Some(encoding) = parts.next().filter(|e| !e.is_empty()) {
            children.push(self.leaf_field("MSH", 2, encoding.to_string()));
        }
        for (i, raw) in parts.enumerate() {
            children.extend(self.field("MSH", i + 3, raw, None));
        }
        Node::branch("MSH", children)
    }

    fn segment(&self, text: &str, pos: Pos) -> Result<Node> {
        let mut parts = text.split(self.delimiters.field);
        let name = parts.next().unwrap_or_default();
        if !is_segment_name(name) {
            return Err(Error::new(
                ErrorKind::InvalidSegmentName {
                    name: name.to_string(),
                },
                Span::new(pos, pos),
            ));
        }
        if name == "MSH" {
            trace!(line = pos.line, "additional MSH segment");
            return Ok(self.header(text));
        }

        let fields: Vec<&str> = parts.collect();
        // OBX-5 is typed by OBX-2
        let value_type = (name == "OBX")
            .then(|| fields.get(1).copied())
            .flatten()
            .filter(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_alphanumeric()))
            .map(str::to_ascii_uppercase);

        let children: Vec<Node> = fields
            .iter()
            .enumerate()
            .flat_map(|(i, raw)| self.field(name, i + 1, raw, value_type.as_deref()))
            .collect();

        if children.is_empty() {
            // A segment without content converts to its own id
            return Ok(Node::leaf(name, name));
        }
        Ok(Node::branch(name, children))
    }

    fn leaf_field(&self, segment: &str, number: usize, text: String) -> Node {
        let node = Node::leaf(format!("{segment}_{number}"), text);
        match dictionary::field(segment, number) {
            Some(def) => node.with_long_name(def.long_name),
            None => node,
        }
    }

    /// One node per non-empty repetition of a field
    fn field(
        &self,
        segment: &str,
        number: usize,
        raw: &str,
        value_type: Option<&str>,
    ) -> Vec<Node> {
        let name = format!("{segment}_{number}");
        let def = dictionary::field(segment, number);
        let data_type = def.and_then(|d| resolve_type(d, value_type));

        raw.split(self.delimiters.repetition)
            .filter_map(|rep| self.repetition(&name, def, data_type, rep))
            .collect()
    }

    fn repetition(
        &self,
        name: &str,
        def: Option<FieldDef>,
        data_type: Option<&str>,
        raw: &str,
    ) -> Option<Node> {
        if raw.is_empty() {
            return None;
        }

        let node = if raw.contains(self.delimiters.component) {
            let components: Vec<Node> = raw
                .split(self.delimiters.component)
                .enumerate()
                .filter_map(|(i, comp)| self.component(name, data_type, i + 1, comp))
                .collect();
            if components.is_empty() {
                return None;
            }
            Node::branch(name, components)
        } else {
            Node::leaf(name, raw)
        };

        Some(match def {
            Some(def) => node.with_long_name(def.long_name),
            None => node,
        })
    }

    fn component(
        &self,
        field_name: &str,
        data_type: Option<&str>,
        number: usize,
        raw: &str,
    ) -> Option<Node> {
        if raw.is_empty() {
            return None;
        }

        let name = match data_type {
            Some(dt) => format!("{dt}_{number}"),
            None => format!("{field_name}_{number}"),
        };

        let node = if raw.contains(self.delimiters.subcomponent) {
            let subcomponents: Vec<Node> = raw
                .split(self.delimiters.subcomponent)
                .enumerate()
                .filter(|(_, sub)| !sub.is_empty())
                .map(|(i, sub)| Node::leaf(format!("{name}_{}", i + 1), sub))
                .collect();
            if subcomponents.is_empty() {
                return None;
            }
            Node::branch(name, subcomponents)
        } else {
            Node::leaf(name, raw)
        };

        let long_name = data_type.and_then(|dt| dictionary::component(dt, number));
        Some(match long_name {
            Some(long_name) => node.with_long_name(long_name),
            None => node,
        })
    }
}

/// Data type of a field; an untyped `VARIES` field has none
fn resolve_type<'a>(def: FieldDef, value_type: Option<&'a str>) -> Option<&'a str> {
    match (def.data_type, value_type) {
        ("VARIES", vt) => vt,
        (dt, _) => Some(dt),
    }
}
