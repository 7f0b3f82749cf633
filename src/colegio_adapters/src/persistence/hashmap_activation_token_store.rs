use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use colegio_core::{ActivationToken, ActivationTokenId, ActivationTokenStore, StoreError, TokenValue};

#[derive(Default)]
struct Tokens {
    by_id: HashMap<ActivationTokenId, ActivationToken>,
    last_id: i64,
}

#[derive(Default, Clone)]
pub struct HashMapActivationTokenStore {
    tokens: Arc<RwLock<Tokens>>,
}

impl HashMapActivationTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ActivationTokenStore for HashMapActivationTokenStore {
    async fn find_by_token(
        &self,
        token: &TokenValue,
    ) -> Result<Option<ActivationToken>, StoreError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .by_id
            .values()
            .find(|record| &record.token == token)
            .cloned())
    }

    async fn save(&self, mut token: ActivationToken) -> Result<ActivationToken, StoreError> {
        let mut tokens = self.tokens.write().await;

        let id = match token.id {
            Some(id) if tokens.by_id.contains_key(&id) => id,
            Some(_) => return Err(StoreError::NotFound),
            None => {
                tokens.last_id += 1;
                ActivationTokenId::new(tokens.last_id)
            }
        };

        token.id = Some(id);
        tokens.by_id.insert(id, token.clone());
        Ok(token)
    }
}
