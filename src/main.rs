#[macro_use]
extern crate log;

use chef_api::ApiClient;
use chef_inventory::inventory;
use clap::Parser;
use failure::Error;
use std::process;

#[derive(Debug, Parser)]
#[command(name = "chef-inventory", version)]
#[command(about = "Chef Server dynamic inventory for Ansible")]
#[command(
    after_help = "Environment:\n  CHEF_PROFILE   Profile to read from ~/.chef/credentials\n  RUST_LOG       Log filter (default: warn)"
)]
struct Cli {
    /// List all nodes, grouped by environment and role.
    #[arg(long)]
    list: bool,
    /// Retrieve variables for a host. No variables are stored, so this is
    /// always empty.
    #[arg(long, value_name = "HOST")]
    host: Option<String>,
}

fn run(cli: &Cli) -> Result<String, Error> {
    if cli.list {
        let client = ApiClient::autoconfigure(None)?;
        let inventory = inventory::list(&client)?;
        info!("Inventory holds {} groups", inventory.len());
        Ok(serde_json::to_string(&inventory)?)
    } else {
        Ok(serde_json::to_string(&inventory::host_vars(cli.host.as_deref()))?)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            for cause in e.iter_causes() {
                error!("caused by: {}", cause);
            }
            process::exit(1);
        }
    }
}
