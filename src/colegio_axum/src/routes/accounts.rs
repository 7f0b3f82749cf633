use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use colegio_core::{AccountUpdate, Email};

use crate::{
    error::ApiError,
    models::{
        AccountFilterQuery, AccountResponse, EmailExistsQuery, EmailExistsResponse,
        UpdateAccountRequest,
    },
    state::AppState,
};

#[tracing::instrument(name = "Email exists", skip_all)]
pub async fn email_exists(
    State(state): State<AppState>,
    Query(query): Query<EmailExistsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let email = Email::parse(&query.email)?;
    let exists = state.accounts.email_exists(&email).await?;

    Ok(Json(EmailExistsResponse { exists }))
}

/// Collaborators for `?collaborator=true`, guardians otherwise.
#[tracing::instrument(name = "List accounts", skip(state))]
pub async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<AccountFilterQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let accounts = state
        .accounts
        .find_accounts_by_filter(query.collaborator)
        .await?;

    let body: Vec<AccountResponse> = accounts.iter().map(AccountResponse::from).collect();
    Ok(Json(body))
}

#[tracing::instrument(name = "Update account", skip_all)]
pub async fn update_account(
    State(state): State<AppState>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let update = AccountUpdate::try_from(request)?;
    let account = state.accounts.update_account(update).await?;

    Ok(Json(AccountResponse::from(&account)))
}
