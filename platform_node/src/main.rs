use anyhow::Result;
use hyperflow_node::api::server::start_api_server;
use hyperflow_node::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env();
    log::info!(
        "starting {} (chain {} / id {})",
        config.network,
        config.chain_name,
        config.chain_id
    );

    start_api_server(config).await
}
