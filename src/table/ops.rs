//! Per-entry memory operations: resolve, read, write, freeze

use crate::core::types::{Address, CheatEntry, MemoryValue};
use crate::memory::accessor::MemoryAccess;
use crate::memory::freezer::ValueFreezer;
use crate::memory::pointer::PointerChainResolver;

/// Resolves an entry's effective address
///
/// The base comes from the entry's literal or plain-hex address text;
/// module-relative expressions and groups do not resolve. When the entry
/// carries offsets, the base is pushed through the pointer chain, so a
/// broken chain also yields `None`.
pub fn resolve_address<M: MemoryAccess + ?Sized>(memory: &M, entry: &CheatEntry) -> Option<Address> {
    let base = entry.address.as_ref()?.base()?;
    PointerChainResolver::new(memory).resolve(base, &entry.offsets)
}

/// Reads the current value behind an entry
///
/// Only fixed-width value types are readable here; `bytes`/`string` entries
/// carry no length and yield `None`.
pub fn read_value<M: MemoryAccess + ?Sized>(memory: &M, entry: &CheatEntry) -> Option<MemoryValue> {
    let address = resolve_address(memory, entry)?;
    memory.read_value(address, entry.value_type?)
}

/// Writes a value through an entry's resolved address
pub fn write_value<M: MemoryAccess + ?Sized>(
    memory: &M,
    entry: &CheatEntry,
    value: &MemoryValue,
) -> bool {
    match resolve_address(memory, entry) {
        Some(address) => memory.write_value(address, value),
        None => false,
    }
}

/// Freezes an entry at the given value
///
/// Resolves the entry, registers the address with the freezer, and flips
/// the entry's frozen state. Returns false (and changes nothing) when the
/// entry does not resolve.
pub fn freeze_entry(freezer: &ValueFreezer, entry: &mut CheatEntry, value: MemoryValue) -> bool {
    let address = match resolve_address(freezer.memory(), entry) {
        Some(address) => address,
        None => return false,
    };

    freezer.add_frozen_address(address, value.clone());
    entry.frozen = true;
    entry.frozen_value = Some(value);
    true
}

/// Unfreezes an entry and clears its frozen state
pub fn unfreeze_entry(freezer: &ValueFreezer, entry: &mut CheatEntry) -> bool {
    let address = match resolve_address(freezer.memory(), entry) {
        Some(address) => address,
        None => return false,
    };

    freezer.remove_frozen_address(address);
    entry.frozen = false;
    entry.frozen_value = None;
    true
}
