//! Windows API layer: raw bindings wrapped in safe functions and types

pub mod bindings;
pub mod types;
