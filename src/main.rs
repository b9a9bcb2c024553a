mod app;
mod prelude;
mod store;
mod utils;

use anyhow::Context as _;
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::utils::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_filter = tracing_subscriber::filter::Targets::default()
        .with_target("hyper", LevelFilter::OFF)
        .with_default(Level::DEBUG);

    tracing_subscriber::fmt()
        .pretty()
        .with_target(true)
        .with_line_number(true)
        .with_max_level(Level::DEBUG)
        .finish()
        .with(log_filter)
        .try_init()?;

    // Load the server config
    let file = std::env::args().nth(1).context("usage: actionators <config.toml>")?;
    let config = Config::load(&file).await?;

    let app = app::build(config.clone()).into_make_service();
    tracing::info!("Live at {}", &config.app.url);

    axum_server::bind(config.net.http_addr).serve(app).await?;

    Ok(())
}
