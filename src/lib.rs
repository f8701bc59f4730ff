//! Thalix memory engine: live process-memory introspection and patching
//!
//! The engine opens a handle to a running target process, reads and writes
//! typed values at arbitrary addresses, scans the address space for exact
//! values, resolves multi-level pointer chains, and continuously rewrites
//! ("freezes") selected addresses on a background thread. Cheat-table files
//! from external authoring tools can be imported into the same entry model.
//!
//! All memory primitives are expressed against the [`MemoryAccess`] trait;
//! the Windows [`process::ProcessHandle`] is the production implementor,
//! while the portable core (scanner, pointer resolution, freezer, entry
//! store, importer) builds and tests on any platform.

pub mod config;
pub mod core;
pub mod memory;
#[cfg(windows)]
pub mod process;
pub mod table;
#[cfg(windows)]
pub mod windows;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export main types from the core module
pub use crate::core::types::{
    Address, CheatEntry, EntryAddress, EntryKind, Hotkey, MemoryError, MemoryResult, MemoryValue,
    ProcessId, ValueType,
};

pub use crate::config::Config;
pub use crate::memory::{
    FrozenAddressSet, MemoryAccess, PointerChainResolver, ValueFreezer, ValueScanner,
};
pub use crate::table::{CheatEntryStore, CheatTableImporter};

#[cfg(windows)]
pub use crate::process::ProcessHandle;
