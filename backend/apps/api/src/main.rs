//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, PgAccountRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use catalog::{PgCatalogRepository, catalog_router};
use platform::mailer::{MailerConfig, SmtpMailer};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let mut auth_config = if cfg!(debug_assertions) {
        AuthConfig::with_random_secret()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == platform::token::TOKEN_SECRET_LEN,
            "TOKEN_SECRET must decode to exactly {} bytes",
            platform::token::TOKEN_SECRET_LEN
        );
        let mut secret = [0u8; platform::token::TOKEN_SECRET_LEN];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            token_secret: secret,
            ..AuthConfig::default()
        }
    };
    auth_config.password_pepper = env::var("PASSWORD_PEPPER").ok().map(String::into_bytes);

    // Mail transport (built once, injected everywhere)
    let smtp_user = env::var("SMTP_USER").expect("SMTP_USER must be set in environment");
    let mailer_config = MailerConfig {
        host: env::var("SMTP_HOST").expect("SMTP_HOST must be set in environment"),
        port: env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()?,
        username: smtp_user.clone(),
        password: env::var("SMTP_PASS").expect("SMTP_PASS must be set in environment"),
        from: env::var("MAIL_FROM").unwrap_or(smtp_user),
    };
    let mailer = SmtpMailer::from_config(&mailer_config)?;

    tracing::info!(host = %mailer_config.host, "Mail transport ready");

    // Repositories
    let account_repo = PgAccountRepository::new(pool.clone());
    let product_repo = PgCatalogRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router; the catalog routes share the auth config so the access
    // guard verifies the same token secret the login path signs with
    let guard_config = Arc::new(auth_config.clone());

    let app = Router::new()
        .nest("/auth", auth_router(account_repo, mailer.clone(), auth_config))
        .nest("/products", catalog_router(product_repo, mailer, guard_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
