use ongaku_core::application::{
    ports::{
        mailer::Mailer,
        security::PasswordHasher,
        time::Clock,
        util::ResetTokenGenerator,
    },
    services::{ApplicationServices, PasswordResetConfig},
};
use ongaku_core::config::AppConfig;
use ongaku_core::domain::{
    password_reset::PasswordResetRepository,
    playlist::{PlaylistEntryRepository, PlaylistRepository},
    room::RoomRepository,
    song::SongRepository,
    user::UserRepository,
};
use ongaku_core::infrastructure::{
    database,
    email::TracingMailer,
    repositories::{
        PostgresPasswordResetRepository, PostgresPlaylistEntryRepository,
        PostgresPlaylistRepository, PostgresRoomRepository, PostgresSongRepository,
        PostgresUserRepository,
    },
    security::password::Argon2PasswordHasher,
    time::SystemClock,
    util::UuidResetTokenGenerator,
};
use ongaku_core::presentation::http::{routes::build_router, state::HttpState};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let song_repo: Arc<dyn SongRepository> = Arc::new(PostgresSongRepository::new(pool.clone()));
    let playlist_repo: Arc<dyn PlaylistRepository> =
        Arc::new(PostgresPlaylistRepository::new(pool.clone()));
    let playlist_entry_repo: Arc<dyn PlaylistEntryRepository> =
        Arc::new(PostgresPlaylistEntryRepository::new(pool.clone()));
    let room_repo: Arc<dyn RoomRepository> = Arc::new(PostgresRoomRepository::new(pool.clone()));
    let reset_repo: Arc<dyn PasswordResetRepository> =
        Arc::new(PostgresPasswordResetRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let mailer: Arc<dyn Mailer> = Arc::new(TracingMailer::new(config.mail_sender().to_string()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let reset_tokens: Arc<dyn ResetTokenGenerator> = Arc::new(UuidResetTokenGenerator::default());

    let reset_config = PasswordResetConfig {
        public_base_url: config.public_base_url().to_string(),
        token_ttl: chrono::Duration::seconds(config.reset_token_ttl_secs() as i64),
    };

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        song_repo,
        playlist_repo,
        playlist_entry_repo,
        room_repo,
        reset_repo,
        password_hasher,
        mailer,
        clock,
        reset_tokens,
        reset_config,
    ));

    let state = HttpState { services };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
