//! Listing sort orders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sort order for store listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Catalog order, which lists the most recent additions as authored.
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
}

/// Unrecognized sort order name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order '{0}' (expected newest, price-low or price-high)")]
pub struct UnknownSortOrder(pub String);

impl SortOrder {
    /// Query-string name of the sort order.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("newest".parse(), Ok(SortOrder::Newest));
        assert_eq!("price-low".parse(), Ok(SortOrder::PriceLowToHigh));
        assert_eq!("price-high".parse(), Ok(SortOrder::PriceHighToLow));
        assert_eq!(
            "cheapest".parse::<SortOrder>(),
            Err(UnknownSortOrder("cheapest".to_string()))
        );
    }
}
