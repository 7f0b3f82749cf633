use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use colegio_core::{AccountId, RoleAssignment};

use crate::{
    error::ApiError, extractors::Authenticated, models::RoleAssignmentBody, state::AppState,
};

#[tracing::instrument(name = "Assign role", skip(state, auth, body))]
pub async fn assign_role(
    State(state): State<AppState>,
    Authenticated(auth): Authenticated,
    Path(account_id): Path<AccountId>,
    Json(body): Json<RoleAssignmentBody>,
) -> Result<impl IntoResponse, ApiError> {
    let saved = state
        .accounts
        .assign_role(RoleAssignment::from(body), account_id, &auth)
        .await?;

    Ok((StatusCode::CREATED, Json(RoleAssignmentBody::from(saved))))
}

/// Delete the assignment named by the body's `id`.
#[tracing::instrument(name = "Remove role", skip(state, _auth, body))]
pub async fn remove_role(
    State(state): State<AppState>,
    Authenticated(_auth): Authenticated,
    Path(account_id): Path<AccountId>,
    Json(body): Json<RoleAssignmentBody>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .accounts
        .remove_role(&RoleAssignment::from(body), account_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
