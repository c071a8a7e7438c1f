pub mod entity;
pub mod repository;

pub use entity::{NewUser, User};
pub use repository::UserRepository;
