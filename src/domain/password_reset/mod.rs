pub mod entity;
pub mod repository;

pub use entity::PasswordReset;
pub use repository::PasswordResetRepository;
