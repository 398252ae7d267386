//! Chat members - users and the commands they queue against rooms

pub mod command;
pub mod user;


pub use command::{Command, CommandKind};
pub use user::User;
