//! Concrete adapter implementations

pub mod json_store;
pub mod memory;
pub mod scoring;
pub mod verify;

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use scoring::{FixedScorer, HeuristicScorer};
pub use verify::DemoVerifier;
