//! Target process access (Windows)

mod handle;

pub use handle::{ProcessAccess, ProcessHandle};
