//! Test fixture: an in-memory target process
//!
//! Backs the portable core's tests with explicitly mapped regions, so
//! unmapped-page and partial-transfer behavior is exercised for real.

use crate::core::types::Address;
use crate::memory::accessor::MemoryAccess;
use std::sync::Mutex;

/// A fake address space made of explicitly mapped regions
///
/// Reads and writes must fall entirely inside one mapped region; anything
/// else fails the way an unmapped or partially-mapped range does against a
/// live process.
pub struct FakeProcess {
    regions: Mutex<Vec<(usize, Vec<u8>)>>,
}

impl FakeProcess {
    pub fn new() -> Self {
        FakeProcess {
            regions: Mutex::new(Vec::new()),
        }
    }

    /// Maps a region of backing bytes at `base`
    pub fn map(&self, base: usize, data: Vec<u8>) {
        self.regions.lock().unwrap().push((base, data));
    }
}

impl Default for FakeProcess {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAccess for FakeProcess {
    fn read_bytes(&self, address: Address, len: usize) -> Option<Vec<u8>> {
        let addr = address.as_usize();
        let end = addr.checked_add(len)?;
        let regions = self.regions.lock().unwrap();

        regions.iter().find_map(|(base, data)| {
            if addr >= *base && end <= base + data.len() {
                Some(data[addr - base..end - base].to_vec())
            } else {
                None
            }
        })
    }

    fn write_bytes(&self, address: Address, data: &[u8]) -> bool {
        let addr = address.as_usize();
        let end = match addr.checked_add(data.len()) {
            Some(end) => end,
            None => return false,
        };
        let mut regions = self.regions.lock().unwrap();

        for (base, backing) in regions.iter_mut() {
            if addr >= *base && end <= *base + backing.len() {
                backing[addr - *base..end - *base].copy_from_slice(data);
                return true;
            }
        }
        false
    }
}
