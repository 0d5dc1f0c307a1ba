use clap::Parser;

use snooze::config::{Cli, Config};
use snooze::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = Config::load(cli);

    logging::init();

    server::listener::run(&cfg).await
}
