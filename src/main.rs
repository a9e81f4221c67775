use log::{error, info};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::explorer::Explorer;
use crate::page::Page;

mod config;
mod error;
mod explorer;
mod format;
mod page;
mod stats;

async fn print_page(explorer: &Explorer, config: &Config) {
    let page = Mutex::new(Page::new(&config.link_base));
    stats::fill_page(explorer, &config.coins, &page).await;
    print!("{}", page.into_inner());
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    info!("Using explorer API at {}.", config.addr);
    let explorer = Explorer::new(&config.addr, &config.user_agent);

    match config.refresh {
        None => print_page(&explorer, &config).await,
        Some(period) => {
            info!(
                "Refreshing every {}.",
                compound_duration::format_dhms(period.as_secs())
            );
            loop {
                print_page(&explorer, &config).await;
                println!();
                tokio::time::sleep(period).await;
            }
        }
    }
}
