//! Cheat entry model: named memory locations, groups, and hotkey metadata

use super::address::Address;
use super::value::{MemoryValue, ValueType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Distinguishes leaf entries from group headers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Entry,
    Group,
}

/// The address of a cheat entry
///
/// Scan-promoted entries carry a literal numeric address; imported entries
/// keep the authoring tool's raw address text, which may be a hex literal or
/// a `[module+offset]` expression this engine does not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryAddress {
    Literal(u64),
    Expression(String),
}

impl EntryAddress {
    /// Resolves the base address, if it can be determined confidently
    ///
    /// Literal addresses always resolve. Expression text resolves only when
    /// it is a plain hex or decimal literal; bracketed or module-relative
    /// forms are left unresolved rather than guessed at.
    pub fn base(&self) -> Option<Address> {
        match self {
            EntryAddress::Literal(value) => Some(Address::new(*value as usize)),
            EntryAddress::Expression(text) => {
                let text = text.trim();
                if text.contains('[') || text.contains(']') || text.contains('+') {
                    return None;
                }
                Address::from_str(text).ok()
            }
        }
    }
}

impl From<Address> for EntryAddress {
    fn from(address: Address) -> Self {
        EntryAddress::Literal(address.as_usize() as u64)
    }
}

/// A hotkey binding imported from an external cheat table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotkey {
    pub action: String,
    pub keys: String,
}

/// One named memory location of interest
///
/// A `group` entry has no address or value type and owns an ordered sequence
/// of children; the tree has no back-references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheatEntry {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub kind: EntryKind,
    pub address: Option<EntryAddress>,
    #[serde(rename = "type")]
    pub value_type: Option<ValueType>,
    #[serde(default)]
    pub offsets: Vec<i64>,
    #[serde(default)]
    pub frozen: bool,
    #[serde(default)]
    pub frozen_value: Option<MemoryValue>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hotkeys: Vec<Hotkey>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CheatEntry>,
}

impl CheatEntry {
    /// Creates a leaf entry
    pub fn new(
        name: impl Into<String>,
        address: EntryAddress,
        value_type: ValueType,
        description: impl Into<String>,
        offsets: Vec<i64>,
    ) -> Self {
        CheatEntry {
            name: name.into(),
            description: description.into(),
            kind: EntryKind::Entry,
            address: Some(address),
            value_type: Some(value_type),
            offsets,
            frozen: false,
            frozen_value: None,
            enabled: false,
            hotkeys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a group header that owns child entries
    pub fn group(description: impl Into<String>, children: Vec<CheatEntry>) -> Self {
        let description = description.into();
        CheatEntry {
            name: description.clone(),
            description,
            kind: EntryKind::Group,
            address: None,
            value_type: None,
            offsets: Vec::new(),
            frozen: false,
            frozen_value: None,
            enabled: false,
            hotkeys: Vec::new(),
            children,
        }
    }

    /// Returns true for group headers
    pub fn is_group(&self) -> bool {
        self.kind == EntryKind::Group
    }
}
