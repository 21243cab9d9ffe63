//! Test Support
//!
//! In-memory models for exercising plugins and wrappers without a music
//! provider.

pub mod memory;

pub use memory::MemoryModel;
