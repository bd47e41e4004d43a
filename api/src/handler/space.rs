use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::SpaceId,
    space::event::{CreateSpace, DeleteSpace},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::space::{CreateSpaceRequest, CreatedSpaceResponse, SpaceResponse, SpacesResponse},
};

pub async fn register_space(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateSpaceRequest>,
) -> AppResult<(StatusCode, Json<CreatedSpaceResponse>)> {
    req.validate(&())?;

    let event = CreateSpace::from(req);
    if !event.hour_window_is_valid() {
        return Err(AppError::UnprocessableEntity(
            "Hourly spaces need a start and end hour at least one hour apart".into(),
        ));
    }

    registry
        .space_repository()
        .create(event, user.id())
        .await
        .map(|space_id| (StatusCode::CREATED, Json(CreatedSpaceResponse { space_id })))
}

pub async fn show_space_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpacesResponse>> {
    registry
        .space_repository()
        .find_all()
        .await
        .map(SpacesResponse::from)
        .map(Json)
}

pub async fn show_space(
    _user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpaceResponse>> {
    registry
        .space_repository()
        .find_by_id(space_id)
        .await
        .and_then(|space| match space {
            Some(space) => Ok(Json(space.into())),
            None => Err(AppError::EntityNotFound("space not found".into())),
        })
}

pub async fn delete_space(
    user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let delete_space = DeleteSpace {
        space_id,
        requested_user: user.id(),
    };
    registry
        .space_repository()
        .delete(delete_space)
        .await
        .map(|_| StatusCode::OK)
}
