use color_eyre::eyre::Result;
use colegio_adapters::{
    Argon2PasswordHasher, AskamaTemplateRenderer, PostgresAccountStore,
    PostgresActivationTokenStore, PostgresRoleAssignmentStore, PostmarkEmailClient,
    config::ColegioSettings, persistence::run_migrations,
};
use colegio_application::AccountService;
use colegio_core::Email;
use colegio_service::ColegioService;
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgPoolOptions;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = ColegioSettings::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.postgres.max_connections)
        .connect(settings.postgres.url.expose_secret())
        .await?;

    run_migrations(&pg_pool).await?;

    let http_client = HttpClient::builder()
        .timeout(settings.email_client.timeout())
        .build()?;

    let email_client = PostmarkEmailClient::new(
        settings.email_client.base_url.clone(),
        Email::try_from(Secret::new(settings.email_client.sender.clone()))?,
        settings.email_client.auth_token.clone(),
        http_client,
    );

    let accounts = AccountService::new(
        PostgresAccountStore::new(pg_pool.clone()),
        PostgresActivationTokenStore::new(pg_pool.clone()),
        PostgresRoleAssignmentStore::new(pg_pool),
        Argon2PasswordHasher::new(),
        email_client,
        AskamaTemplateRenderer::new(),
    );

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!("Starting account service...");

    ColegioService::new(accounts, settings.application.base_url)
        .run_standalone(listener)
        .await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
