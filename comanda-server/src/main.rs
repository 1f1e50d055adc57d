use comanda_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();

    // 2. Configuration
    let config = Config::from_env();

    // 3. Logging (stdout, plus daily files when a log dir is set)
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    print_banner();
    tracing::info!(environment = %config.environment, "Comanda server starting...");

    // 4. State: open the store, wire the services
    let state = ServerState::initialize(&config)?;

    // 5. Serve until ctrl-c
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
