//! Show the contracts recorded in the registry cache of an earlier
//! deployment, and check that the marketplace answers at its address.
use anyhow::Context;
use clap::AppSettings;
use name_service_sdk::{
    chain::GrpcQueryClient,
    constants::contract_keys::MARKETPLACE,
    harness::{config::ChainConfig, ContractRegistry},
    marketplace::NameMarketplaceQueryClient,
};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
struct App {
    #[structopt(long = "config", help = "Chain configuration of the test session.")]
    config:  PathBuf,
    #[structopt(long = "offline", help = "Do not query the marketplace.")]
    offline: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let app = {
        let app = App::clap().global_setting(AppSettings::ColoredHelp);
        let matches = app.get_matches();
        App::from_clap(&matches)
    };

    let config = ChainConfig::from_file(&app.config).await?;
    let registry = ContractRegistry::hydrate(&config.cache_path)
        .await
        .context("Cannot load the registry.")?;

    for (name, code_id) in registry.code_ids() {
        println!("{} (code {})", name, code_id);
        for address in registry.contract_addresses(name) {
            println!("  {}", address);
        }
    }

    if !app.offline {
        let client = GrpcQueryClient::new(config.endpoint()?)
            .await
            .context("Cannot connect.")?;
        let marketplace =
            NameMarketplaceQueryClient::new(client, registry.first_address(MARKETPLACE)?);
        let market_config = marketplace.config().await?;
        println!(
            "Marketplace lists names of {} minted by {}, {} asks.",
            market_config.collection,
            market_config.minter,
            marketplace.ask_count().await?
        );
    }
    Ok(())
}
