// File: usermgmt-server/src/main.rs

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use usermgmt_server::{run_server, Args, ServerConfig, ServerContext};

fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("usermgmt=info".parse().unwrap_or_default())
        .add_directive("usermgmt_server=info".parse().unwrap_or_default())
        .add_directive("usermgmt_core=info".parse().unwrap_or_default())
        .add_directive("tower_http=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(sub) {
        eprintln!("Failed to set global subscriber: {}", e);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    info!(
        "usermgmt starting. addr={}, on_user_delete={}, page_size={}, seed={}",
        args.server_addr, args.on_user_delete, args.page_size, !args.no_seed
    );

    let config = ServerConfig::try_from(&args)?;
    let ctx = ServerContext::new(config).await?;

    if let Err(e) = run_server(ctx).await {
        error!("Server error: {:?}", e);
        return Err(e.into());
    }
    info!("Main finished. Goodbye!");
    Ok(())
}
