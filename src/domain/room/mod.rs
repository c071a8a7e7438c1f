pub mod entity;
pub mod repository;

pub use entity::{NewRoom, Room};
pub use repository::RoomRepository;
