use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::ProposalId, proposal::Proposal};

#[async_trait]
pub trait ProposalRepository: Send + Sync {
    /// Stages a proposal for `ttl` seconds.
    async fn store(&self, proposal: &Proposal, ttl: u64) -> AppResult<()>;
    /// Atomically consumes a staged proposal. An unknown or expired id
    /// fails with `InvalidProposalTokenError`; one consumed earlier fails
    /// with `ProposalTokenAlreadyUsedError`.
    async fn take(&self, proposal_id: ProposalId) -> AppResult<Proposal>;
}
