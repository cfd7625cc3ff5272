use crate::output;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use user_service::{ServiceConfig, UserService};

/// Serve the user directory over gRPC
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to a YAML config file (default: ~/.usersctl/config.yaml if present)
    #[arg(long, short = 'c', value_name = "FILE", env = "USERSCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address, overrides `listen_addr` from the config file
    #[arg(long, value_name = "ADDR")]
    pub addr: Option<String>,
}

/// Resolve the config file and apply flag overrides
pub fn load_config(args: &ServeArgs) -> Result<ServiceConfig> {
    let mut config = ServiceConfig::load_or_default(args.config.as_deref())
        .wrap_err("failed to load configuration")?;
    if let Some(addr) = &args.addr {
        config.listen_addr = addr.clone();
    }
    Ok(config)
}

pub async fn execute(config: ServiceConfig) -> Result<()> {
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .wrap_err_with(|| format!("invalid listen address '{}'", config.listen_addr))?;

    output::status("Serving", &format!("user directory on {}", addr));
    if !config.seed_users.is_empty() {
        output::dim(&format!("  {} seed user(s) loaded", config.seed_users.len()));
    }

    let service = UserService::with_users(config.seed_users);
    user_rpc::serve(addr, service).await?;
    Ok(())
}
