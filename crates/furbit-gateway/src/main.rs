use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod app;
mod http;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "furbit_gateway=info,tower_http=debug".into()),
        )
        .init();

    // config precedence: FURBIT_CONFIG env path, then ~/.furbit/furbit.toml
    let config_path = std::env::var("FURBIT_CONFIG").ok();
    let config =
        furbit_core::config::FurbitConfig::load(config_path.as_deref()).unwrap_or_else(|e| {
            tracing::warn!("Config load failed ({}), using defaults", e);
            furbit_core::config::FurbitConfig::default()
        });

    let bind = config.gateway.bind.clone();
    let port = config.gateway.port;

    // one SQLite file carries both stores
    let db_path = &config.database.path;
    ensure_parent_dir(db_path);
    info!(path = %db_path, "opening SQLite database");

    let db = rusqlite::Connection::open(db_path)?;
    db.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    // apply schema migrations (all idempotent)
    furbit_pets::db::init_db(&db)?;
    furbit_ledger::db::init_db(&db)?;
    info!("database migrations complete");

    // each store opens its own connection; the engine shares them via Arc
    let pets = Arc::new(furbit_pets::PetStore::new(rusqlite::Connection::open(
        db_path,
    )?)?);
    let ledger = Arc::new(furbit_ledger::ReminderLedger::new(
        rusqlite::Connection::open(db_path)?,
    )?);

    if config.mailer.api_token.is_none() {
        tracing::warn!("mailer.api_token not set; deliveries will fail until configured");
    }
    let channel: Arc<dyn furbit_channels::NotificationChannel> =
        Arc::new(furbit_channels::EmailChannel::from_config(&config.mailer));

    let engine = furbit_reminders::ReminderEngine::new(
        pets,
        Arc::clone(&ledger),
        Arc::clone(&channel),
        Box::new(furbit_reminders::SystemClock),
    );

    let state = Arc::new(app::AppState::new(config, engine, ledger, channel));
    let router = app::build_router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("Furbit reminder gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

/// Ensure the parent directory for a file path exists.
fn ensure_parent_dir(path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
}
