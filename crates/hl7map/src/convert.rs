//! Message tree to key-value conversion

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{info, instrument};

use crate::er7::{Config, Parser};
use crate::error::{Error, ErrorKind, Result, Span};
use crate::node::{Content, Node};
use crate::value::{Array, Object, Value};

/// Default recursion limit for [`convert`]
pub const DEFAULT_MAX_DEPTH: u16 = 64;

/// Key naming scheme for converted nodes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Naming {
    /// Short canonical names such as `PID_5`
    Short,
    /// Long names such as `PATIENT_NAME`, falling back to the short name
    #[default]
    Long,
}

/// Conversion options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    pub naming: Naming,
    /// Maximum tree depth (0 means unlimited)
    pub max_depth: u16,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new(Naming::default())
    }
}

impl ConvertOptions {
    pub const fn new(naming: Naming) -> Self {
        Self {
            naming,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Options with no depth limit
    pub const fn unlimited(naming: Naming) -> Self {
        Self {
            naming,
            max_depth: 0,
        }
    }
}

/// Key a node is stored under: its short name, or its long name when long
/// naming is selected and the node has one, upper-cased either way
pub fn chosen_name(node: &Node, naming: Naming) -> String {
    match (naming, node.long_name.as_deref()) {
        (Naming::Long, Some(long)) if !long.is_empty() => long.to_uppercase(),
        _ => node.name.to_uppercase(),
    }
}

/// Convert a node and its subtree
///
/// A leaf yields its text unchanged. A branch yields an object keyed by each
/// child's chosen name; children sharing a key are collected into an array in
/// document order.
pub fn convert(node: &Node, options: &ConvertOptions) -> Result<Value> {
    convert_at(node, options, 1)
}

fn convert_at(node: &Node, options: &ConvertOptions, depth: u16) -> Result<Value> {
    if options.max_depth > 0 && depth > options.max_depth {
        return Err(Error::detached(ErrorKind::MaxDepthExceeded {
            max: options.max_depth,
        }));
    }

    match &node.content {
        Content::Leaf(text) => Ok(Value::String(text.clone())),
        Content::Branch(children) if children.is_empty() => {
            Err(Error::detached(ErrorKind::ContractViolation {
                node: node.name.clone(),
            }))
        }
        Content::Branch(children) => {
            let mut builder = KeyedBuilder::with_capacity(children.len());
            for child in children {
                let value = convert_at(child, options, depth.saturating_add(1))?;
                builder.push(chosen_name(child, options.naming), value);
            }
            Ok(Value::Object(builder.finish()))
        }
    }
}

/// Parse raw ER7 text and convert the whole message to an object
#[instrument(skip(raw), fields(len = raw.len()))]
pub fn message_to_map(raw: &str, naming: Naming) -> Result<Object> {
    message_to_map_with_options(raw, &ConvertOptions::new(naming))
}

/// [`message_to_map`] with explicit conversion options
pub fn message_to_map_with_options(raw: &str, options: &ConvertOptions) -> Result<Object> {
    let mut parser = Parser::with_config(raw.as_bytes(), Config::default());
    let message = parser.parse()?;

    let map = match convert(&message.root, options)? {
        Value::Object(map) => map,
        _ => {
            return Err(Error::with_message(
                ErrorKind::ContractViolation {
                    node: message.root.name.clone(),
                },
                Span::empty(),
                "message root converted to a leaf",
            ))
        }
    };

    info!(
        control_id = message.control_id().unwrap_or("<none>"),
        structure = message.structure(),
        keys = map.len(),
        "converted message"
    );
    Ok(map)
}

/// Per-key state while a branch is being folded
enum Slot {
    One(Value),
    Many(Vec<Value>),
}

/// Ordered builder that promotes a key to an array on its second occurrence
struct KeyedBuilder {
    slots: IndexMap<String, Slot>,
}

impl KeyedBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: IndexMap::with_capacity(capacity),
        }
    }

    fn push(&mut self, key: String, value: Value) {
        match self.slots.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(Slot::One(value));
            }
            Entry::Occupied(mut entry) => {
                let slot = entry.get_mut();
                *slot = match std::mem::replace(slot, Slot::Many(Vec::new())) {
                    Slot::One(first) => Slot::Many(vec![first, value]),
                    Slot::Many(mut values) => {
                        values.push(value);
                        Slot::Many(values)
                    }
                };
            }
        }
    }

    fn finish(self) -> Object {
        self.slots
            .into_iter()
            .map(|(key, slot)| {
                let value = match slot {
                    Slot::One(value) => value,
                    Slot::Many(values) => Value::Array(Array::from(values)),
                };
                (key, value)
            })
            .collect()
    }
}
