use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use colegio_core::{HasherError, Password, PasswordHash, PasswordHasher};
use secrecy::{ExposeSecret, Secret};

/// Argon2id hasher. Hashing runs on the blocking thread pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HasherError> {
        let password = password.as_ref().clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(Secret::new(h.to_string())))
                    .map_err(|e| HasherError(e.to_string()))
            })
        })
        .await
        .map_err(|e| HasherError(e.to_string()))?
    }
}

fn argon2() -> Result<Argon2<'static>, HasherError> {
    let params = Params::new(15000, 2, 1, None).map_err(|e| HasherError(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}
