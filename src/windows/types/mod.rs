//! Safe wrapper types over raw Windows handles

mod handle;

pub use handle::Handle;
