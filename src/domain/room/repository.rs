use crate::domain::errors::DomainResult;
use crate::domain::room::entity::{NewRoom, Room};
use async_trait::async_trait;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Room>>;

    async fn find_all(&self) -> DomainResult<Vec<Room>>;

    /// Rooms whose name starts with the given prefix.
    async fn find_by_name_prefix(&self, prefix: &str) -> DomainResult<Vec<Room>>;

    async fn insert(&self, new_room: NewRoom) -> DomainResult<Room>;

    async fn update(&self, room: &Room) -> DomainResult<()>;

    async fn delete_by_id(&self, id: i64) -> DomainResult<()>;
}
