use axum::{
    Router,
    routing::{get, post},
};
use colegio_application::AccountService;
use colegio_axum::{AppState, routes};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front of the account service.
pub struct ColegioService {
    router: Router,
}

impl ColegioService {
    /// Build every route over `accounts`.
    ///
    /// `base_url` prefixes the activation links sent by email.
    pub fn new(accounts: AccountService, base_url: impl Into<String>) -> Self {
        let state = AppState::new(accounts, base_url.into());

        let router = Router::new()
            .route(
                "/accounts",
                post(routes::register)
                    .get(routes::list_accounts)
                    .put(routes::update_account),
            )
            .route("/accounts/exists", get(routes::email_exists))
            .route(
                "/accounts/{id}/roles",
                post(routes::assign_role).delete(routes::remove_role),
            )
            .route("/activar/{token}", get(routes::activate))
            .route(
                "/reenviarTokenActivacion/{token}",
                get(routes::resend_activation),
            )
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a router that can be mounted on another router.
    pub fn as_nested_router(self) -> Router {
        self.with_trace_layer().router
    }

    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_nested_router();

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
