use std::time::Duration;

use crate::error::{Error, Result};
use crate::format::CoinUnit;

const DEFAULT_ADDR: &str = "http://localhost:23110";
const DEFAULT_USER_AGENT: &str = "Rivine-Agent";
const MAX_PRECISION: u32 = 38;

pub struct Config {
    pub addr: String,
    pub user_agent: String,
    pub coins: CoinUnit,
    pub link_base: String,
    pub refresh: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::resolve(std::env::args().nth(1), |key| std::env::var(key).ok())
    }

    /// The positional argument wins over `EXPLORER_STATS_ADDR`.
    fn resolve(arg: Option<String>, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = arg
            .or_else(|| var("EXPLORER_STATS_ADDR"))
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr.trim_end_matches('/').to_string();
        if !addr.starts_with("http://") && !addr.starts_with("https://") {
            return Err(Error::Config(format!("unsupported API address {}", addr)));
        }

        let mut coins = CoinUnit::default();
        if let Some(precision) = var("EXPLORER_STATS_PRECISION") {
            coins.precision = precision
                .parse::<u32>()
                .ok()
                .filter(|precision| *precision <= MAX_PRECISION)
                .ok_or_else(|| Error::Config(format!("invalid coin precision {}", precision)))?;
        }
        if let Some(name) = var("EXPLORER_STATS_UNIT") {
            coins.name = name;
        }

        let refresh = match var("EXPLORER_STATS_REFRESH") {
            Some(secs) => {
                let secs: u64 = secs
                    .parse()
                    .map_err(|_| Error::Config(format!("invalid refresh period {}", secs)))?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            addr,
            user_agent: var("EXPLORER_STATS_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            coins,
            link_base: var("EXPLORER_STATS_LINK_BASE").unwrap_or_default(),
            refresh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(arg: Option<&str>, vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::resolve(arg.map(str::to_string), |key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = resolve(None, &[]).unwrap();

        assert_eq!(config.addr, "http://localhost:23110");
        assert_eq!(config.user_agent, "Rivine-Agent");
        assert_eq!(config.coins, CoinUnit::default());
        assert_eq!(config.link_base, "");
        assert!(config.refresh.is_none());
    }

    #[test]
    fn argument_wins_over_env() {
        let vars = [("EXPLORER_STATS_ADDR", "http://env:1")];

        assert_eq!(resolve(Some("https://arg:2/"), &vars).unwrap().addr, "https://arg:2");
        assert_eq!(resolve(None, &vars).unwrap().addr, "http://env:1");
    }

    #[test]
    fn reads_environment() {
        let config = resolve(
            None,
            &[
                ("EXPLORER_STATS_USER_AGENT", "curl"),
                ("EXPLORER_STATS_PRECISION", "6"),
                ("EXPLORER_STATS_UNIT", "GFT"),
                ("EXPLORER_STATS_LINK_BASE", "https://explorer.example/"),
                ("EXPLORER_STATS_REFRESH", "30"),
            ],
        )
        .unwrap();

        assert_eq!(config.user_agent, "curl");
        assert_eq!(
            config.coins,
            CoinUnit {
                precision: 6,
                name: "GFT".to_string()
            }
        );
        assert_eq!(config.link_base, "https://explorer.example/");
        assert_eq!(config.refresh, Some(Duration::from_secs(30)));
    }

    #[test]
    fn zero_refresh_disables_watch() {
        let config = resolve(None, &[("EXPLORER_STATS_REFRESH", "0")]).unwrap();

        assert!(config.refresh.is_none());
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(resolve(Some("localhost:23110"), &[]), Err(Error::Config(_))));
        assert!(matches!(
            resolve(None, &[("EXPLORER_STATS_PRECISION", "39")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            resolve(None, &[("EXPLORER_STATS_PRECISION", "nine")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            resolve(None, &[("EXPLORER_STATS_REFRESH", "-1")]),
            Err(Error::Config(_))
        ));
    }
}
