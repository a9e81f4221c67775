use std::fmt::Write;

use chrono::{TimeZone, Utc};
use num_bigint::BigUint;
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Deserializer};

use crate::page::Element;

const SI_SUFFIXES: [&str; 8] = ["K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Arbitrary precision amount as sent by the explorer.
///
/// Currencies arrive as decimal strings, smaller values may arrive as plain
/// JSON integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Amount(pub BigUint);

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text
                .parse::<BigUint>()
                .map(Amount)
                .map_err(serde::de::Error::custom),
            Raw::Number(number) => Ok(Amount::from(number)),
        }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount(BigUint::from(value))
    }
}

/// How base units map to whole coins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinUnit {
    pub precision: u32,
    pub name: String,
}

impl Default for CoinUnit {
    fn default() -> Self {
        Self {
            precision: 9,
            name: String::from("AUR"),
        }
    }
}

pub fn link_height(height: u64) -> Element {
    Element::Link {
        text: height.to_formatted_string(&Locale::en),
        href: format!("block.html?height={}", height),
    }
}

pub fn link_hash(hash: &str) -> Element {
    Element::Link {
        text: hash.to_string(),
        href: format!("hash.html?hash={}", hash),
    }
}

/// Scales by powers of 1000, truncating to two decimals.
pub fn readable_difficulty(difficulty: &Amount) -> String {
    let thousand = BigUint::from(1000u32);
    if difficulty.0 < thousand {
        return difficulty.0.to_string();
    }

    let mut scale = thousand.clone();
    let mut index = 0;
    while index + 1 < SI_SUFFIXES.len() && difficulty.0 >= &scale * &thousand {
        scale *= &thousand;
        index += 1;
    }

    let hundredths = &difficulty.0 * 100u32 / &scale;
    let whole = &hundredths / 100u32;
    let fraction = &hundredths % 100u32;
    format!(
        "{}.{:0>2} {}",
        whole.to_formatted_string(&Locale::en),
        fraction.to_string(),
        SI_SUFFIXES[index]
    )
}

pub fn format_unix_time(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .map(|timestamp| timestamp.to_string())
        .unwrap_or_else(|| format!("invalid time ({})", secs))
}

pub fn readable_coins(amount: &Amount, unit: &CoinUnit) -> String {
    let one_coin = BigUint::from(10u32).pow(unit.precision);
    let whole = &amount.0 / &one_coin;
    let fraction = &amount.0 % &one_coin;

    let mut content = whole.to_formatted_string(&Locale::en);
    if fraction != BigUint::default() {
        let digits = format!(
            "{:0>width$}",
            fraction.to_string(),
            width = unit.precision as usize
        );
        write!(content, ".{}", digits.trim_end_matches('0')).ok();
    }
    if !unit.name.is_empty() {
        write!(content, " {}", unit.name).ok();
    }
    content
}
