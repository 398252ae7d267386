//! Domain layer - Core chat types with no I/O
//!
//! This layer contains:
//! - Entities: Permission levels, message identity, sender snapshots
//! - Traits: Abstractions for room policies and output sinks

pub mod entities;
pub mod traits;
