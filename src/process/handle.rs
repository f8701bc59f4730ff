//! Safe process handle wrapper with RAII semantics

use crate::core::types::{Address, MemoryError, MemoryResult};
use crate::memory::accessor::MemoryAccess;
use crate::windows::bindings::kernel32;
use crate::windows::types::Handle;
use std::fmt;
use tracing::info;

/// Access rights for process handles
#[derive(Debug, Clone, Copy)]
pub struct ProcessAccess {
    value: u32,
}

impl ProcessAccess {
    /// Query information access
    pub const QUERY_INFORMATION: Self = Self { value: 0x0400 };
    /// Read memory access
    pub const VM_READ: Self = Self { value: 0x0010 };
    /// Write memory access
    pub const VM_WRITE: Self = Self { value: 0x0020 };
    /// Virtual-memory operations (protection changes)
    pub const VM_OPERATION: Self = Self { value: 0x0008 };

    /// Combine access rights
    pub fn combine(rights: &[Self]) -> Self {
        let mut value = 0;
        for right in rights {
            value |= right.value;
        }
        Self { value }
    }

    /// Get raw value
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Exclusive access to one target process's memory
///
/// The OS handle is owned by this object and closed exactly once, either by
/// an explicit [`close`](ProcessHandle::close) or on drop. Every memory
/// operation checks that the handle is still open first; a caller replacing
/// its handle with a fresh `open` drops (and thereby closes) the old one.
pub struct ProcessHandle {
    handle: Handle,
    pid: u32,
}

impl ProcessHandle {
    /// Opens a process with the full set of rights the engine needs:
    /// read, write, virtual-memory operations, and information queries
    pub fn open(pid: u32) -> MemoryResult<Self> {
        Self::open_with_access(
            pid,
            ProcessAccess::combine(&[
                ProcessAccess::QUERY_INFORMATION,
                ProcessAccess::VM_READ,
                ProcessAccess::VM_WRITE,
                ProcessAccess::VM_OPERATION,
            ]),
        )
    }

    /// Opens a process with explicit access rights
    pub fn open_with_access(pid: u32, access: ProcessAccess) -> MemoryResult<Self> {
        let raw_handle = kernel32::open_process(pid, access.value())?;
        info!(pid, access = access.value(), "opened process");
        Ok(ProcessHandle {
            handle: Handle::new(raw_handle),
            pid,
        })
    }

    /// Get the process ID
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Whether a live OS handle is held
    pub fn is_open(&self) -> bool {
        !self.handle.is_null()
    }

    /// Releases the OS handle; safe to call multiple times
    pub fn close(&mut self) {
        self.handle.close();
    }

    /// Read memory from the process, returning the transferred byte count
    pub fn read_memory(&self, address: usize, buffer: &mut [u8]) -> MemoryResult<usize> {
        if !self.is_open() {
            return Err(MemoryError::ProcessNotOpen);
        }
        unsafe { kernel32::read_process_memory(self.handle.raw(), address, buffer) }
    }

    /// Write memory to the process, returning the transferred byte count
    pub fn write_memory(&self, address: usize, data: &[u8]) -> MemoryResult<usize> {
        if !self.is_open() {
            return Err(MemoryError::ProcessNotOpen);
        }
        unsafe { kernel32::write_process_memory(self.handle.raw(), address, data) }
    }
}

impl MemoryAccess for ProcessHandle {
    fn read_bytes(&self, address: Address, len: usize) -> Option<Vec<u8>> {
        let mut buffer = vec![0u8; len];
        match self.read_memory(address.as_usize(), &mut buffer) {
            // A partial transfer is a full failure: a truncated typed read
            // is not a valid value of that type
            Ok(transferred) if transferred == len => Some(buffer),
            _ => None,
        }
    }

    fn write_bytes(&self, address: Address, data: &[u8]) -> bool {
        matches!(
            self.write_memory(address.as_usize(), data),
            Ok(transferred) if transferred == data.len()
        )
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("pid", &self.pid)
            .field("open", &self.is_open())
            .finish()
    }
}

impl fmt::Display for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProcessHandle(pid={}, open={})", self.pid, self.is_open())
    }
}
