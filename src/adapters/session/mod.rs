//! Session Registry Adapters.

mod in_memory_registry;

pub use in_memory_registry::{EvictionPolicy, InMemorySessionRegistry, SharedSession};
