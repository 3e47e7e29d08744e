//! List the asks of a name marketplace, optionally only those of one seller.
use anyhow::Context;
use clap::AppSettings;
use name_service_sdk::{chain::GrpcQueryClient, marketplace::NameMarketplaceQueryClient};
use structopt::StructOpt;
use name_service_sdk::endpoints::Endpoint;

#[derive(StructOpt)]
struct App {
    #[structopt(
        long = "node",
        help = "GRPC interface of the node.",
        default_value = "http://localhost:9090"
    )]
    endpoint:    Endpoint,
    #[structopt(long = "marketplace", help = "Address of the name marketplace.")]
    marketplace: String,
    #[structopt(long = "seller", help = "Only list the asks of this seller.")]
    seller:      Option<String>,
    #[structopt(long = "limit", help = "Maximum number of asks to list.")]
    limit:       Option<u32>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let app = {
        let app = App::clap().global_setting(AppSettings::ColoredHelp);
        let matches = app.get_matches();
        App::from_clap(&matches)
    };

    let client = GrpcQueryClient::new(app.endpoint)
        .await
        .context("Cannot connect.")?;
    let marketplace = NameMarketplaceQueryClient::new(client, app.marketplace);

    let asks = match app.seller {
        Some(seller) => {
            marketplace
                .asks_by_seller(&seller, None, app.limit)
                .await?
        }
        None => marketplace.asks(None, app.limit).await?,
    };
    println!("{} asks in total.", marketplace.ask_count().await?);
    for ask in asks {
        println!(
            "{}: {} sold by {}, renewal at {} with a fund of {}",
            ask.id, ask.token_id, ask.seller, ask.renewal_time, ask.renewal_fund
        );
    }
    Ok(())
}
