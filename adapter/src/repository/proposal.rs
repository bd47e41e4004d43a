use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::ProposalId, proposal::Proposal};
use kernel::repository::proposal::ProposalRepository;
use shared::error::{AppError, AppResult};

use crate::redis::{
    model::{ProposalEntry, ProposalKey},
    RedisClient,
};

/// Staged proposals live in the key-value store under a TTL; the store
/// is authoritative for expiry. Redeeming swaps in a tombstone so a
/// replayed token is told apart from an unknown one.
#[derive(new)]
pub struct ProposalRepositoryImpl {
    kv: Arc<RedisClient>,
    redeemed_ttl: u64,
}

#[async_trait]
impl ProposalRepository for ProposalRepositoryImpl {
    async fn store(&self, proposal: &Proposal, ttl: u64) -> AppResult<()> {
        let key = ProposalKey::from(proposal.proposal_id);
        let entry = ProposalEntry::stage(proposal)?;
        self.kv.set_ex(&key, &entry, ttl).await
    }

    async fn take(&self, proposal_id: ProposalId) -> AppResult<Proposal> {
        let key = ProposalKey::from(proposal_id);
        // one round trip: write the tombstone, read what was there before
        let previous = self
            .kv
            .swap_ex(&key, &ProposalEntry::Redeemed, self.redeemed_ttl)
            .await?;
        match previous.map(ProposalEntry::try_from).transpose()? {
            None => Err(AppError::InvalidProposalTokenError),
            Some(ProposalEntry::Redeemed) => Err(AppError::ProposalTokenAlreadyUsedError),
            Some(ProposalEntry::Staged { payload }) => serde_json::from_str(&payload)
                .map_err(|e| AppError::ConversionEntityError(e.to_string())),
        }
    }
}
