//! Exhaustive chunked scanning for exact values

use crate::config::DEFAULT_SCAN_CHUNK_SIZE;
use crate::core::types::{Address, MemoryValue};
use crate::memory::accessor::MemoryAccess;
use tracing::debug;

/// Scans an address range for the exact encoding of a value
///
/// The range is walked in fixed-size chunks with one bounded read per
/// chunk. Chunks that cannot be read (unmapped, protected) are skipped, so
/// an inaccessible region never terminates the scan. Within a readable
/// chunk every byte offset is probed, since target values need not be
/// naturally aligned. Comparison is exact bit-pattern equality of the
/// little-endian encoding, for floats as well as integers.
pub struct ValueScanner<'a, M: MemoryAccess + ?Sized> {
    memory: &'a M,
    chunk_size: usize,
}

impl<'a, M: MemoryAccess + ?Sized> ValueScanner<'a, M> {
    /// Creates a scanner with the default chunk size (one page)
    pub fn new(memory: &'a M) -> Self {
        ValueScanner {
            memory,
            chunk_size: DEFAULT_SCAN_CHUNK_SIZE,
        }
    }

    /// Creates a scanner with an explicit chunk size
    ///
    /// A zero chunk size falls back to the default.
    pub fn with_chunk_size(memory: &'a M, chunk_size: usize) -> Self {
        ValueScanner {
            memory,
            chunk_size: if chunk_size == 0 {
                DEFAULT_SCAN_CHUNK_SIZE
            } else {
                chunk_size
            },
        }
    }

    /// Returns every address in `[start, end)` holding the value's encoding
    ///
    /// The scan is a pure read-only pass; no narrowing state is retained.
    /// Callers wanting next-scan refinement re-check the returned addresses
    /// themselves.
    pub fn scan(&self, value: &MemoryValue, start: Address, end: Address) -> Vec<Address> {
        let needle = value.to_bytes();
        let mut results = Vec::new();

        if needle.is_empty() || start >= end {
            return results;
        }

        let end = end.as_usize();
        let mut current = start.as_usize();

        while current < end {
            let len = self.chunk_size.min(end - current);

            // Unreadable chunks are skipped, not fatal
            if let Some(data) = self.memory.read_bytes(Address::new(current), len) {
                if data.len() >= needle.len() {
                    for (offset, window) in data.windows(needle.len()).enumerate() {
                        if window == needle.as_slice() {
                            results.push(Address::new(current + offset));
                        }
                    }
                }
            }

            current = match current.checked_add(self.chunk_size) {
                Some(next) => next,
                None => break,
            };
        }

        debug!(
            matches = results.len(),
            width = needle.len(),
            "value scan finished"
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeProcess;

    #[test]
    fn test_scan_finds_single_match_between_unmapped_pages() {
        let mem = FakeProcess::new();
        // One readable page; everything before and after is unmapped
        let mut page = vec![0u8; 4096];
        page[100..104].copy_from_slice(&100i32.to_le_bytes());
        mem.map(0x30000, page);

        let scanner = ValueScanner::new(&mem);
        let hits = scanner.scan(
            &MemoryValue::Int(100),
            Address::new(0x10000),
            Address::new(0x50000),
        );

        assert_eq!(hits, vec![Address::new(0x30000 + 100)]);
    }

    #[test]
    fn test_scan_respects_range_bounds() {
        let mem = FakeProcess::new();
        let mut page = vec![0u8; 4096];
        page[0..4].copy_from_slice(&7i32.to_le_bytes());
        page[2048..2052].copy_from_slice(&7i32.to_le_bytes());
        mem.map(0x10000, page);

        let scanner = ValueScanner::new(&mem);
        let lo = Address::new(0x10000);
        let hi = Address::new(0x10000 + 1024);
        let hits = scanner.scan(&MemoryValue::Int(7), lo, hi);

        assert_eq!(hits, vec![lo]);
        for hit in hits {
            assert!(hit >= lo && hit < hi);
        }
    }

    #[test]
    fn test_scan_probes_unaligned_offsets() {
        let mem = FakeProcess::new();
        let mut page = vec![0u8; 256];
        page[13..17].copy_from_slice(&0x0BADF00Di32.to_le_bytes());
        mem.map(0x10000, page);

        let scanner = ValueScanner::with_chunk_size(&mem, 256);
        let hits = scanner.scan(
            &MemoryValue::Int(0x0BADF00D),
            Address::new(0x10000),
            Address::new(0x10100),
        );

        assert_eq!(hits, vec![Address::new(0x10000 + 13)]);
    }

    #[test]
    fn test_scan_reports_overlapping_matches() {
        let mem = FakeProcess::new();
        // 0x01010101 repeated: the pattern 01 01 01 01 matches at offsets 0..=4
        mem.map(0x10000, vec![1u8; 8]);

        let scanner = ValueScanner::with_chunk_size(&mem, 8);
        let hits = scanner.scan(
            &MemoryValue::Int(0x01010101),
            Address::new(0x10000),
            Address::new(0x10008),
        );

        assert_eq!(hits.len(), 5);
        assert_eq!(hits[0], Address::new(0x10000));
        assert_eq!(hits[4], Address::new(0x10004));
    }

    #[test]
    fn test_scan_float_is_bit_exact() {
        let mem = FakeProcess::new();
        let mut page = vec![0u8; 64];
        page[8..12].copy_from_slice(&1.5f32.to_le_bytes());
        page[32..36].copy_from_slice(&1.5000001f32.to_le_bytes());
        mem.map(0x10000, page);

        let scanner = ValueScanner::with_chunk_size(&mem, 64);
        let hits = scanner.scan(
            &MemoryValue::Float(1.5),
            Address::new(0x10000),
            Address::new(0x10040),
        );

        // The near-miss encoding does not match
        assert_eq!(hits, vec![Address::new(0x10008)]);
    }

    #[test]
    fn test_scan_empty_range_and_bytes_value() {
        let mem = FakeProcess::new();
        mem.map(0x10000, vec![0xAB; 32]);

        let scanner = ValueScanner::new(&mem);
        assert!(scanner
            .scan(
                &MemoryValue::Int(1),
                Address::new(0x20000),
                Address::new(0x10000)
            )
            .is_empty());
        assert!(scanner
            .scan(
                &MemoryValue::Bytes(vec![]),
                Address::new(0x10000),
                Address::new(0x10020)
            )
            .is_empty());

        let hits = scanner.scan(
            &MemoryValue::Bytes(vec![0xAB, 0xAB, 0xAB]),
            Address::new(0x10000),
            Address::new(0x10004),
        );
        assert_eq!(hits.len(), 2);
    }
}
