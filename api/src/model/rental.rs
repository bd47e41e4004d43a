use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ProposalId, RentalId, SpaceId, UserId},
    proposal::Proposal,
    rental::{Rental, RentalDraft, RentalType},
};
use serde::{Deserialize, Serialize};

/// Raw proposal body. Every field is optional on purpose: the validity
/// checker owns the missing-attribute rule and its message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalProposalRequest {
    pub initial_date: Option<String>,
    pub final_date: Option<String>,
    #[serde(rename = "type")]
    pub rental_type: Option<String>,
    pub meters: Option<f64>,
}

impl From<CreateRentalProposalRequest> for RentalDraft {
    fn from(value: CreateRentalProposalRequest) -> Self {
        let CreateRentalProposalRequest {
            initial_date,
            final_date,
            rental_type,
            meters,
        } = value;
        RentalDraft {
            initial_date,
            final_date,
            rental_type,
            meters,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalProposalResponse {
    pub proposal_id: ProposalId,
    pub space_id: SpaceId,
    #[serde(rename = "type")]
    pub rental_type: RentalType,
    pub initial_date: DateTime<Utc>,
    pub final_date: DateTime<Utc>,
    pub meters: f64,
    pub cost: f64,
    pub expires_at: DateTime<Utc>,
}

impl From<Proposal> for RentalProposalResponse {
    fn from(value: Proposal) -> Self {
        let Proposal {
            proposal_id,
            space_id,
            renter_id: _,
            rental_type,
            initial_date,
            final_date,
            meters,
            cost,
            expires_at,
        } = value;
        Self {
            proposal_id,
            space_id,
            rental_type,
            initial_date,
            final_date,
            meters,
            cost,
            expires_at,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRentalRequest {
    pub proposal_id: ProposalId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalsResponse {
    pub items: Vec<RentalResponse>,
}

impl From<Vec<Rental>> for RentalsResponse {
    fn from(value: Vec<Rental>) -> Self {
        Self {
            items: value.into_iter().map(RentalResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub rental_id: RentalId,
    pub space_id: SpaceId,
    pub rented_by: UserId,
    #[serde(rename = "type")]
    pub rental_type: RentalType,
    pub initial_date: DateTime<Utc>,
    pub final_date: DateTime<Utc>,
    pub meters: f64,
    pub cost: f64,
    pub rented_at: DateTime<Utc>,
}

impl From<Rental> for RentalResponse {
    fn from(value: Rental) -> Self {
        let Rental {
            rental_id,
            space_id,
            rented_by,
            rental_type,
            initial_date,
            final_date,
            meters,
            cost,
            rented_at,
        } = value;
        Self {
            rental_id,
            space_id,
            rented_by,
            rental_type,
            initial_date,
            final_date,
            meters,
            cost,
            rented_at,
        }
    }
}
