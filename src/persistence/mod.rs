//! Driven adapters which hold todo data on behalf of the domain
pub mod in_memory;
