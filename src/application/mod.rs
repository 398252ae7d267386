//! Application layer - Rooms, members and their rules
//! 
//! This layer contains:
//! - Rooms: The mediator and its fixed send workflow
//! - Policies: Per-theme validation, permission and engagement rules
//! - Members: Users and the commands they queue
//! - Services: Wiring rooms and users from config
//! - Errors: Domain-specific errors

pub mod errors;
pub mod members;
pub mod policies;
pub mod rooms;
pub mod services;
