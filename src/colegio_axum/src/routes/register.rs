use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use colegio_core::{AccountCandidate, TokenValue};

use crate::{
    error::ApiError,
    models::{AccountResponse, RegisterAccountRequest},
    state::AppState,
};

/// Create an account and email its activation links.
///
/// A failed email does not fail the registration.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate = AccountCandidate::try_from(request)?;

    let account = state.accounts.register_account(candidate).await?;
    let token = state
        .accounts
        .issue_activation_token(&account, TokenValue::generate())
        .await
        .inspect_err(|e| {
            tracing::error!(
                account_id = ?account.id,
                error = %e,
                "Account registered but no activation token was issued"
            );
        })?;

    let status = state
        .accounts
        .send_activation_email(&account, &token.token, &state.base_url)
        .await;
    if !status.is_sent() {
        tracing::warn!(account_id = ?account.id, "Account registered without activation email");
    }

    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}
