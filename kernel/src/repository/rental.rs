use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    rental::{event::CreateRental, Rental},
};

#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Commits a rental. Implementations must re-run the overlap/capacity
    /// re-check atomically with the insert, so two concurrent confirms on
    /// the same space cannot both pass and both persist.
    async fn create(&self, event: CreateRental) -> AppResult<Rental>;
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Rental>>;
}
