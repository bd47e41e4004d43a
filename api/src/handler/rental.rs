use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::SpaceId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::rental::{
        ConfirmRentalRequest, CreateRentalProposalRequest, RentalProposalResponse, RentalResponse,
        RentalsResponse,
    },
};

/// Propose phase. Validity, availability and pricing run against a
/// snapshot of the space; nothing is written to the rental store, only a
/// proposal is staged and handed back.
pub async fn propose_rental(
    user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRentalProposalRequest>,
) -> AppResult<(StatusCode, Json<RentalProposalResponse>)> {
    registry
        .booking_coordinator()
        .propose(space_id, user.id(), user.role(), req.into())
        .await
        .map(|proposal| (StatusCode::CREATED, Json(proposal.into())))
}

/// Confirm phase. Redeems the staged proposal exactly once and commits
/// the rental against the current state of the space.
pub async fn confirm_rental(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<ConfirmRentalRequest>,
) -> AppResult<(StatusCode, Json<RentalResponse>)> {
    registry
        .booking_coordinator()
        .confirm(req.proposal_id, user.id())
        .await
        .map(|rental| (StatusCode::CREATED, Json(rental.into())))
}

pub async fn show_own_rentals(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RentalsResponse>> {
    registry
        .rental_repository()
        .find_by_user_id(user.id())
        .await
        .map(RentalsResponse::from)
        .map(Json)
}
