//! Cheat entry management: the entry store, table import, and per-entry ops

pub mod import;
pub mod ops;
pub mod store;

pub use import::CheatTableImporter;
pub use ops::{freeze_entry, read_value, resolve_address, unfreeze_entry, write_value};
pub use store::CheatEntryStore;
