//! Safe wrappers around the raw Windows API calls the engine needs

pub mod kernel32;
