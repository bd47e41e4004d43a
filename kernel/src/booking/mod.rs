use std::sync::Arc;

use chrono::Duration;
use shared::error::{AppError, AppResult};

use crate::{
    clock::Clock,
    model::{
        id::{ProposalId, RentalId, SpaceId, UserId},
        proposal::Proposal,
        rental::{event::CreateRental, Rental, RentalDraft},
        role::Role,
        space::Space,
    },
    repository::{proposal::ProposalRepository, rental::RentalRepository, space::SpaceRepository},
};

pub mod availability;
mod error;
pub mod pricing;
pub mod validity;

pub use error::RuleViolation;

/// Orchestrates the two-phase reservation protocol. Propose validates,
/// prices and stages a proposal without touching the rental store;
/// confirm redeems the staged proposal exactly once and commits it
/// against the current state of the space.
pub struct BookingCoordinator {
    space_repository: Arc<dyn SpaceRepository>,
    rental_repository: Arc<dyn RentalRepository>,
    proposal_repository: Arc<dyn ProposalRepository>,
    clock: Arc<dyn Clock>,
    proposal_ttl: u64,
}

impl BookingCoordinator {
    pub fn new(
        space_repository: Arc<dyn SpaceRepository>,
        rental_repository: Arc<dyn RentalRepository>,
        proposal_repository: Arc<dyn ProposalRepository>,
        clock: Arc<dyn Clock>,
        proposal_ttl: u64,
    ) -> Self {
        Self {
            space_repository,
            rental_repository,
            proposal_repository,
            clock,
            proposal_ttl,
        }
    }

    pub async fn propose(
        &self,
        space_id: SpaceId,
        renter_id: UserId,
        role: Role,
        draft: RentalDraft,
    ) -> AppResult<Proposal> {
        let now = self.clock.now();
        let request = validity::check(&draft, now)?;

        let space = self.space_with_rentals(space_id, now).await?;
        if space.owner.owner_id == renter_id {
            return Err(AppError::ForbiddenOperation(
                "Cannot rent your own space".into(),
            ));
        }
        availability::check(&request, renter_id, &space, now)?;

        let cost = pricing::cost(&request, &space, role);
        let expires_at = now + Duration::seconds(self.proposal_ttl as i64);
        let proposal = Proposal::new(space_id, renter_id, request, cost, expires_at);
        self.proposal_repository
            .store(&proposal, self.proposal_ttl)
            .await?;
        Ok(proposal)
    }

    pub async fn confirm(&self, proposal_id: ProposalId, caller_id: UserId) -> AppResult<Rental> {
        let proposal = self.proposal_repository.take(proposal_id).await?;
        if proposal.renter_id != caller_id {
            return Err(AppError::ForbiddenOperation(
                "Cannot rent in the name of another user".into(),
            ));
        }

        // Cost travels with the proposal; a space whose state drifted
        // since propose fails the commit re-check instead of triggering
        // a silent re-price.
        let event = CreateRental::new(
            RentalId::new(),
            proposal.space_id,
            proposal.renter_id,
            proposal.rental_type,
            proposal.initial_date,
            proposal.final_date,
            proposal.meters,
            proposal.cost,
            self.clock.now(),
        );
        self.rental_repository.create(event).await
    }

    async fn space_with_rentals(
        &self,
        space_id: SpaceId,
        now: chrono::DateTime<chrono::Utc>,
    ) -> AppResult<Space> {
        self.space_repository
            .find_with_active_rentals(space_id, now)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("space {space_id} is not registered")))
    }
}
