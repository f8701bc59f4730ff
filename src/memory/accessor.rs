//! Typed read/write primitives over a target process's memory
//!
//! Expected failures (unmapped address, partial transfer, closed handle) are
//! reported as `None`/`false`, never as panics or error values. A partial
//! transfer counts as a full failure: a truncated typed read is not a valid
//! value of that type.

use crate::core::types::{Address, MemoryValue, ValueType};

/// Read and write access to a target address space
///
/// `read_bytes` must return `None` unless exactly `len` bytes were
/// transferred; `write_bytes` must return `true` only when the full buffer
/// was written. The typed wrappers are derived from those two primitives
/// with little-endian encoding.
pub trait MemoryAccess {
    /// Reads exactly `len` bytes at `address`
    fn read_bytes(&self, address: Address, len: usize) -> Option<Vec<u8>>;

    /// Writes the whole buffer at `address`
    fn write_bytes(&self, address: Address, data: &[u8]) -> bool;

    /// Reads a single byte
    fn read_byte(&self, address: Address) -> Option<u8> {
        self.read_bytes(address, 1).map(|b| b[0])
    }

    /// Reads a 2-byte integer
    fn read_short(&self, address: Address) -> Option<i16> {
        self.read_bytes(address, 2)
            .and_then(|b| b.try_into().ok())
            .map(i16::from_le_bytes)
    }

    /// Reads a 4-byte signed integer
    fn read_int(&self, address: Address) -> Option<i32> {
        self.read_bytes(address, 4)
            .and_then(|b| b.try_into().ok())
            .map(i32::from_le_bytes)
    }

    /// Reads an 8-byte signed integer
    fn read_long(&self, address: Address) -> Option<i64> {
        self.read_bytes(address, 8)
            .and_then(|b| b.try_into().ok())
            .map(i64::from_le_bytes)
    }

    /// Reads a 4-byte IEEE-754 float
    fn read_float(&self, address: Address) -> Option<f32> {
        self.read_bytes(address, 4)
            .and_then(|b| b.try_into().ok())
            .map(f32::from_le_bytes)
    }

    /// Reads an 8-byte IEEE-754 double
    fn read_double(&self, address: Address) -> Option<f64> {
        self.read_bytes(address, 8)
            .and_then(|b| b.try_into().ok())
            .map(f64::from_le_bytes)
    }

    /// Reads a pointer-sized (8-byte) slot and interprets it as an address
    fn read_pointer(&self, address: Address) -> Option<Address> {
        self.read_bytes(address, 8)
            .and_then(|b| b.try_into().ok())
            .map(|b| Address::new(u64::from_le_bytes(b) as usize))
    }

    /// Writes a single byte
    fn write_byte(&self, address: Address, value: u8) -> bool {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Writes a 2-byte integer
    fn write_short(&self, address: Address, value: i16) -> bool {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Writes a 4-byte signed integer
    fn write_int(&self, address: Address, value: i32) -> bool {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Writes an 8-byte signed integer
    fn write_long(&self, address: Address, value: i64) -> bool {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Writes a 4-byte IEEE-754 float
    fn write_float(&self, address: Address, value: f32) -> bool {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Writes an 8-byte IEEE-754 double
    fn write_double(&self, address: Address, value: f64) -> bool {
        self.write_bytes(address, &value.to_le_bytes())
    }

    /// Reads a value of the given fixed-width type
    ///
    /// Variable-size types (`bytes`, `string`) have no implied length and
    /// return `None`; read those through `read_bytes` with an explicit
    /// length instead.
    fn read_value(&self, address: Address, value_type: ValueType) -> Option<MemoryValue> {
        let len = value_type.size()?;
        let data = self.read_bytes(address, len)?;
        MemoryValue::from_bytes(&data, value_type)
    }

    /// Writes a value using its type's little-endian encoding
    fn write_value(&self, address: Address, value: &MemoryValue) -> bool {
        self.write_bytes(address, &value.to_bytes())
    }
}
