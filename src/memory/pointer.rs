//! Multi-level pointer chain resolution

use crate::core::types::Address;
use crate::memory::accessor::MemoryAccess;

/// Resolves `[[base+off0]+off1]+...+offN` style chains
///
/// For every offset except the last, the 8-byte slot at `current + offset`
/// is read and its value becomes the new current address. The final offset
/// is added arithmetically and returned without a dereference. A failed
/// read anywhere in the chain invalidates the whole resolution; broken
/// links are not retried or defaulted.
pub struct PointerChainResolver<'a, M: MemoryAccess + ?Sized> {
    memory: &'a M,
}

impl<'a, M: MemoryAccess + ?Sized> PointerChainResolver<'a, M> {
    /// Creates a resolver over the given accessor
    pub fn new(memory: &'a M) -> Self {
        PointerChainResolver { memory }
    }

    /// Resolves the chain to a final address
    ///
    /// An empty offsets list returns the base address unmodified.
    pub fn resolve(&self, base: Address, offsets: &[i64]) -> Option<Address> {
        let (last, links) = match offsets.split_last() {
            Some(parts) => parts,
            None => return Some(base),
        };

        let mut current = base;
        for offset in links {
            let slot = current.offset(*offset as isize);
            current = self.memory.read_pointer(slot)?;
        }

        Some(current.offset(*last as isize))
    }
}
