//! Background value freezing: continuous rewrite of registered addresses

use crate::config::DEFAULT_FREEZE_INTERVAL_MS;
use crate::core::types::{Address, MemoryValue};
use crate::memory::accessor::MemoryAccess;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error, trace};

/// Registered frozen addresses: resolved address to the value held there
///
/// Keys are unique per address; registering an address again replaces the
/// prior value.
pub type FrozenAddressSet = HashMap<Address, MemoryValue>;

/// Keeps registered memory locations pinned to fixed values
///
/// `start` launches one dedicated worker thread that rewrites every
/// registered (address, value) pair each pass, so writes made by the target
/// process are overwritten within about one period. The registered set is
/// shared between the caller thread and the worker; both sides go through
/// the mutex, and the worker snapshots the set under the lock before
/// writing so registration never races iteration.
pub struct ValueFreezer {
    memory: Arc<dyn MemoryAccess + Send + Sync>,
    frozen: Arc<Mutex<FrozenAddressSet>>,
    running: Arc<AtomicBool>,
    interval: Duration,
    worker: Option<JoinHandle<()>>,
}

impl ValueFreezer {
    /// Creates a freezer with the default cadence (50 ms, ~20 Hz)
    pub fn new(memory: Arc<dyn MemoryAccess + Send + Sync>) -> Self {
        Self::with_interval(memory, Duration::from_millis(DEFAULT_FREEZE_INTERVAL_MS))
    }

    /// Creates a freezer with an explicit rewrite period
    pub fn with_interval(memory: Arc<dyn MemoryAccess + Send + Sync>, interval: Duration) -> Self {
        ValueFreezer {
            memory,
            frozen: Arc::new(Mutex::new(FrozenAddressSet::new())),
            running: Arc::new(AtomicBool::new(false)),
            interval,
            worker: None,
        }
    }

    /// The accessor the freezer writes through
    pub fn memory(&self) -> &(dyn MemoryAccess + Send + Sync) {
        self.memory.as_ref()
    }

    /// Registers an address to freeze; an existing registration is replaced
    pub fn add_frozen_address(&self, address: Address, value: MemoryValue) {
        self.frozen.lock().unwrap().insert(address, value);
    }

    /// Removes a frozen address; unknown addresses are ignored
    pub fn remove_frozen_address(&self, address: Address) {
        self.frozen.lock().unwrap().remove(&address);
    }

    /// Checks whether an address is currently registered
    pub fn is_frozen(&self, address: Address) -> bool {
        self.frozen.lock().unwrap().contains_key(&address)
    }

    /// Number of registered addresses
    pub fn frozen_count(&self) -> usize {
        self.frozen.lock().unwrap().len()
    }

    /// Whether the worker thread is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Starts the background rewrite loop; a no-op while already running
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        let memory = Arc::clone(&self.memory);
        let frozen = Arc::clone(&self.frozen);
        let running = Arc::clone(&self.running);
        let interval = self.interval;

        let spawned = thread::Builder::new()
            .name("value-freezer".to_string())
            .spawn(move || {
                debug!("freezer worker started");
                while running.load(Ordering::SeqCst) {
                    let snapshot: Vec<(Address, MemoryValue)> = {
                        let guard = frozen.lock().unwrap();
                        guard.iter().map(|(a, v)| (*a, v.clone())).collect()
                    };

                    for (address, value) in snapshot {
                        // One bad address must not halt the others
                        if !memory.write_value(address, &value) {
                            trace!(%address, "frozen write failed, continuing");
                        }
                    }

                    thread::sleep(interval);
                }
                debug!("freezer worker stopped");
            });

        match spawned {
            Ok(handle) => self.worker = Some(handle),
            Err(err) => {
                self.running.store(false, Ordering::SeqCst);
                error!("failed to spawn freezer worker: {err}");
            }
        }
    }

    /// Signals the worker to exit after its current pass and waits for it
    ///
    /// The registered set is left intact, so a later `start` resumes
    /// freezing the same addresses.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for ValueFreezer {
    fn drop(&mut self) {
        self.stop();
    }
}
