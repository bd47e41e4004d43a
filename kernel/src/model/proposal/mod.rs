use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    id::{ProposalId, SpaceId, UserId},
    rental::{RentalRequest, RentalType},
};

/// A validated-and-priced rental staged server-side between propose and
/// confirm. The opaque proposal id is the capability the client holds;
/// the store's TTL is the authoritative expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub proposal_id: ProposalId,
    pub space_id: SpaceId,
    pub renter_id: UserId,
    pub rental_type: RentalType,
    pub initial_date: DateTime<Utc>,
    pub final_date: DateTime<Utc>,
    pub meters: f64,
    pub cost: f64,
    pub expires_at: DateTime<Utc>,
}

impl Proposal {
    pub fn new(
        space_id: SpaceId,
        renter_id: UserId,
        request: RentalRequest,
        cost: f64,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let RentalRequest {
            rental_type,
            initial_date,
            final_date,
            meters,
        } = request;
        Self {
            proposal_id: ProposalId::new(),
            space_id,
            renter_id,
            rental_type,
            initial_date,
            final_date,
            meters,
            cost,
            expires_at,
        }
    }
}
