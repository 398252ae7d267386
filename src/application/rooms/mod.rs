//! Chat rooms - mediators running the send workflow

pub mod chat_room;


pub use chat_room::{ChatRoom, RoomSnapshot};
