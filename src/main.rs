use std::sync::Arc;

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use users_service::{
    config::Config,
    infrastructure::build_user_repository,
    presentation::http::{app, endpoints::root::ApiState},
};

#[main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "users_service=info,poem=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::try_parse()?;
    let server_url = config.server_url();

    let repo = build_user_repository(&config.storage).await?;
    let state = Arc::new(ApiState::new(repo));

    tracing::info!("Starting server at {}", server_url);

    Server::new(TcpListener::bind(config.bind_address()))
        .run_with_graceful_shutdown(
            app(state, server_url),
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
            None,
        )
        .await?;

    Ok(())
}
