//! Typed memory value enum with little-endian encoding

use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed value read from or written to target-process memory
///
/// All multi-byte encodings are little-endian. The variant tag drives the
/// width used by read, write, and scan operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum MemoryValue {
    Byte(u8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bytes(Vec<u8>),
    String(String),
}

impl MemoryValue {
    /// Returns the size in bytes of the value's encoding
    pub fn size(&self) -> usize {
        match self {
            MemoryValue::Byte(_) => 1,
            MemoryValue::Short(_) => 2,
            MemoryValue::Int(_) | MemoryValue::Float(_) => 4,
            MemoryValue::Long(_) | MemoryValue::Double(_) => 8,
            MemoryValue::Bytes(b) => b.len(),
            MemoryValue::String(s) => s.len(),
        }
    }

    /// Encodes the value as little-endian bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            MemoryValue::Byte(v) => v.to_le_bytes().to_vec(),
            MemoryValue::Short(v) => v.to_le_bytes().to_vec(),
            MemoryValue::Int(v) => v.to_le_bytes().to_vec(),
            MemoryValue::Long(v) => v.to_le_bytes().to_vec(),
            MemoryValue::Float(v) => v.to_le_bytes().to_vec(),
            MemoryValue::Double(v) => v.to_le_bytes().to_vec(),
            MemoryValue::Bytes(b) => b.clone(),
            MemoryValue::String(s) => s.as_bytes().to_vec(),
        }
    }

    /// Decodes a value of the given type from little-endian bytes
    ///
    /// Returns `None` when the buffer is shorter than the type's width; a
    /// truncated read is never a valid value.
    pub fn from_bytes(bytes: &[u8], value_type: ValueType) -> Option<Self> {
        match value_type {
            ValueType::Byte => bytes.first().map(|&b| MemoryValue::Byte(b)),
            ValueType::Short => bytes
                .get(..2)?
                .try_into()
                .ok()
                .map(|b| MemoryValue::Short(i16::from_le_bytes(b))),
            ValueType::Int => bytes
                .get(..4)?
                .try_into()
                .ok()
                .map(|b| MemoryValue::Int(i32::from_le_bytes(b))),
            ValueType::Long => bytes
                .get(..8)?
                .try_into()
                .ok()
                .map(|b| MemoryValue::Long(i64::from_le_bytes(b))),
            ValueType::Float => bytes
                .get(..4)?
                .try_into()
                .ok()
                .map(|b| MemoryValue::Float(f32::from_le_bytes(b))),
            ValueType::Double => bytes
                .get(..8)?
                .try_into()
                .ok()
                .map(|b| MemoryValue::Double(f64::from_le_bytes(b))),
            ValueType::Bytes => Some(MemoryValue::Bytes(bytes.to_vec())),
            ValueType::String => String::from_utf8(bytes.to_vec()).ok().map(MemoryValue::String),
        }
    }

    /// Gets the type tag for this value
    pub fn value_type(&self) -> ValueType {
        match self {
            MemoryValue::Byte(_) => ValueType::Byte,
            MemoryValue::Short(_) => ValueType::Short,
            MemoryValue::Int(_) => ValueType::Int,
            MemoryValue::Long(_) => ValueType::Long,
            MemoryValue::Float(_) => ValueType::Float,
            MemoryValue::Double(_) => ValueType::Double,
            MemoryValue::Bytes(_) => ValueType::Bytes,
            MemoryValue::String(_) => ValueType::String,
        }
    }
}

impl fmt::Display for MemoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryValue::Byte(v) => write!(f, "{}", v),
            MemoryValue::Short(v) => write!(f, "{}", v),
            MemoryValue::Int(v) => write!(f, "{}", v),
            MemoryValue::Long(v) => write!(f, "{}", v),
            MemoryValue::Float(v) => write!(f, "{}", v),
            MemoryValue::Double(v) => write!(f, "{}", v),
            MemoryValue::Bytes(b) => write!(f, "{:?}", b),
            MemoryValue::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Type tag for a memory value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
}

impl ValueType {
    /// Returns the fixed width in bytes, or `None` for variable-size types
    pub fn size(&self) -> Option<usize> {
        match self {
            ValueType::Byte => Some(1),
            ValueType::Short => Some(2),
            ValueType::Int | ValueType::Float => Some(4),
            ValueType::Long | ValueType::Double => Some(8),
            ValueType::Bytes | ValueType::String => None,
        }
    }
}
