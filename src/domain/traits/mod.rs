//! Domain traits - Abstractions for room policies and output

pub mod policy;
pub mod sink;

pub use policy::RoomPolicy;
pub use sink::Sink;
