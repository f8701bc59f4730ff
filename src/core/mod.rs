//! Core module containing the fundamental types of the memory engine
//!
//! This module provides the building blocks used throughout the crate:
//! address handling, typed memory values, cheat entries, and error types.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{Address, CheatEntry, MemoryError, MemoryResult, MemoryValue, ValueType};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
