use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

use crate::model::{
    id::{SpaceId, UserId},
    space::{
        event::{CreateSpace, DeleteSpace},
        Space,
    },
};

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn create(&self, event: CreateSpace, owner_id: UserId) -> AppResult<SpaceId>;
    async fn find_all(&self) -> AppResult<Vec<Space>>;
    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<Space>>;
    /// Returns the space with its rentals still active at `now` loaded,
    /// which is the snapshot the availability engine evaluates.
    async fn find_with_active_rentals(
        &self,
        space_id: SpaceId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Space>>;
    async fn delete(&self, event: DeleteSpace) -> AppResult<()>;
}
