use hr_server::{BoxError, Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // 1. .env, then configuration
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;

    // 2. Logging
    init_logger_with_file(&config.log_level, config.log_dir.as_deref());
    tracing::info!(environment = %config.environment, "HR server starting...");

    // 3. Database and services
    let state = ServerState::initialize(&config).await?;

    // 4. HTTP
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
