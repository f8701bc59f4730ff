//! Memory operations: typed access, scanning, pointer chains, and freezing
//!
//! Everything in this module is written against the [`MemoryAccess`] trait
//! rather than a concrete process handle, so the scan/resolve/freeze
//! machinery works identically over a live process and over test fixtures.

pub mod accessor;
pub mod freezer;
pub mod pointer;
pub mod scanner;

pub use accessor::MemoryAccess;
pub use freezer::{FrozenAddressSet, ValueFreezer};
pub use pointer::PointerChainResolver;
pub use scanner::ValueScanner;
