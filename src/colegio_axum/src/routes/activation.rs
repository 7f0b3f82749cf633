use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use colegio_core::TokenValue;

use crate::{
    error::ApiError,
    models::{AccountResponse, MessageResponse},
    state::AppState,
};

#[tracing::instrument(name = "Activate", skip_all)]
pub async fn activate(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state
        .accounts
        .activate_account(&TokenValue::from(token))
        .await?;

    Ok(Json(AccountResponse::from(&account)))
}

/// Swap the token for a fresh one and email the new links.
///
/// The new token only travels by email.
#[tracing::instrument(name = "Resend activation", skip_all)]
pub async fn resend_activation(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let renewed = state
        .accounts
        .reissue_activation_token(&TokenValue::from(token))
        .await?;
    let account = state.accounts.account_for_token(&renewed.token).await?;

    let status = state
        .accounts
        .send_activation_email(&account, &renewed.token, &state.base_url)
        .await;

    let message = if status.is_sent() {
        "Activation email sent"
    } else {
        "Activation token renewed, email could not be sent"
    };

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}
