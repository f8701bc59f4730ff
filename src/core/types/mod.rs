//! Core type definitions for the memory engine
//!
//! This module contains all fundamental types used throughout the crate,
//! including address wrappers, typed memory values, cheat entries, and
//! error types.

mod address;
mod entry;
mod error;
mod value;

// Re-export all public types
pub use address::Address;
pub use entry::{CheatEntry, EntryAddress, EntryKind, Hotkey};
pub use error::{MemoryError, MemoryResult};
pub use value::{MemoryValue, ValueType};

// Common type aliases
pub type ProcessId = u32;
pub type Offset = i64;
