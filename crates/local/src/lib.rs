//! Pocket Local - JSON-file local storage backend
//!
//! This crate implements the MemoryStore trait on top of a single
//! JSON document that is rewritten atomically on every change.

mod client;

// Re-export the client (implements MemoryStore)
pub use client::JsonMemoryStore;
