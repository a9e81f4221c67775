use log::{debug, warn};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::explorer::Explorer;
use crate::format::{self, Amount, CoinUnit};
use crate::page::{Document, Element, ElementId};

#[derive(Debug, Deserialize)]
pub struct ExplorerStatus {
    pub height: u64,
    pub blockid: String,
    pub difficulty: Amount,
}

#[derive(Debug, Deserialize)]
pub struct ChainStats {
    #[serde(default)]
    pub height: Option<u64>,
    pub time: u64,
    pub spendabletokens: Amount,
    pub spendablelockedtokens: Amount,
    pub totalcustodyfeedebt: Amount,
    pub spenttokens: Amount,
    pub paidcustodyfees: Amount,
}

/// Renders chain height, tip and difficulty.
///
/// A non-200 response leaves the page untouched and is not an error.
pub async fn fill_general_stats<D: Document>(explorer: &Explorer, page: &Mutex<D>) -> Result<()> {
    let body = match explorer.status().await? {
        Some(body) => body,
        None => return Ok(()),
    };
    let status: ExplorerStatus = serde_json::from_str(&body)?;
    debug!("explorer at height {}, tip {}", status.height, status.blockid);

    let mut page = page.lock().await;
    page.set(ElementId::Height, format::link_height(status.height));
    page.set(ElementId::BlockId, format::link_hash(&status.blockid));
    page.set(
        ElementId::Difficulty,
        Element::Text(format::readable_difficulty(&status.difficulty)),
    );

    Ok(())
}

/// Renders the custody fee chain facts.
pub async fn fill_coin_output_stats<D: Document>(
    explorer: &Explorer,
    coins: &CoinUnit,
    page: &Mutex<D>,
) -> Result<()> {
    let body = match explorer.chain_facts().await? {
        Some(body) => body,
        None => return Ok(()),
    };
    let stats: ChainStats = serde_json::from_str(&body)?;
    debug!("chain facts at height {:?}, time {}", stats.height, stats.time);

    let readable = |amount: &Amount| Element::Text(format::readable_coins(amount, coins));

    let mut page = page.lock().await;
    page.set(ElementId::Time, Element::Text(format::format_unix_time(stats.time)));
    page.set(ElementId::TokensSpendable, readable(&stats.spendabletokens));
    page.set(ElementId::TokensLocked, readable(&stats.spendablelockedtokens));
    page.set(ElementId::CustodyFeeDebt, readable(&stats.totalcustodyfeedebt));
    page.set(ElementId::TokensSpent, readable(&stats.spenttokens));
    page.set(ElementId::CustodyFeeCollected, readable(&stats.paidcustodyfees));

    Ok(())
}

/// Runs both loaders concurrently. A failing loader is logged and never
/// affects the other one.
pub async fn fill_page<D: Document>(explorer: &Explorer, coins: &CoinUnit, page: &Mutex<D>) {
    let (general, coin_outputs) = tokio::join!(
        fill_general_stats(explorer, page),
        fill_coin_output_stats(explorer, coins, page)
    );

    if let Err(e) = general {
        warn!("Unable to load general stats: {}", e);
    }
    if let Err(e) = coin_outputs {
        warn!("Unable to load coin output stats: {}", e);
    }
}
