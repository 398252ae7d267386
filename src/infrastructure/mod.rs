//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Output sinks (console, in-memory)

pub mod config;
pub mod adapters;
