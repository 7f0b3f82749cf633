use std::sync::Arc;

use colegio_application::AccountService;

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    /// Public URL prefix for the links sent by email.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(accounts: AccountService, base_url: impl Into<Arc<str>>) -> Self {
        Self {
            accounts,
            base_url: base_url.into(),
        }
    }
}
