// File: usermgmt-server/src/config.rs

use std::net::SocketAddr;

use clap::Parser;

use usermgmt_core::{DeleteBehavior, Error, StoreConfig};

pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Parser, Debug, Clone)]
#[command(name = "usermgmt")]
#[command(author, version, about = "usermgmt - user management web app with an audit log")]
pub struct Args {
    /// Address to which the HTTP server will bind
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub server_addr: String,

    /// What happens to a user's log entries on delete: no-action, set-null or cascade
    #[arg(long, default_value = "no-action")]
    pub on_user_delete: DeleteBehavior,

    /// Page size used by the logs index when the request does not give a valid one
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: i64,

    /// Start with an empty store instead of the sample users
    #[arg(long, default_value = "false")]
    pub no_seed: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub store: StoreConfig,
    pub seed: bool,
    pub default_page_size: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            store: StoreConfig::default(),
            seed: true,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TryFrom<&Args> for ServerConfig {
    type Error = Error;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        if args.page_size < 1 {
            return Err(Error::Validation(format!(
                "--page-size must be at least 1, got {}",
                args.page_size
            )));
        }
        Ok(Self {
            addr: args.server_addr.parse()?,
            store: StoreConfig {
                on_user_delete: args.on_user_delete,
            },
            seed: !args.no_seed,
            default_page_size: args.page_size,
        })
    }
}
