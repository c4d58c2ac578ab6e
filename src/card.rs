use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// One of the thirteen card ranks. Suits never affect play, so they are not modeled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSymbol {
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl CardSymbol {
    pub const ALL: [CardSymbol; 13] = [
        CardSymbol::Ace,
        CardSymbol::Two,
        CardSymbol::Three,
        CardSymbol::Four,
        CardSymbol::Five,
        CardSymbol::Six,
        CardSymbol::Seven,
        CardSymbol::Eight,
        CardSymbol::Nine,
        CardSymbol::Ten,
        CardSymbol::Jack,
        CardSymbol::Queen,
        CardSymbol::King,
    ];

    /// Point value with the Ace counted high.
    pub fn rank(self) -> u8 {
        match self {
            CardSymbol::Ace => 11,
            CardSymbol::Two => 2,
            CardSymbol::Three => 3,
            CardSymbol::Four => 4,
            CardSymbol::Five => 5,
            CardSymbol::Six => 6,
            CardSymbol::Seven => 7,
            CardSymbol::Eight => 8,
            CardSymbol::Nine => 9,
            CardSymbol::Ten | CardSymbol::Jack | CardSymbol::Queen | CardSymbol::King => 10,
        }
    }

    pub fn is_ace(self) -> bool {
        self == CardSymbol::Ace
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardSymbol::Ace => "A",
            CardSymbol::Two => "2",
            CardSymbol::Three => "3",
            CardSymbol::Four => "4",
            CardSymbol::Five => "5",
            CardSymbol::Six => "6",
            CardSymbol::Seven => "7",
            CardSymbol::Eight => "8",
            CardSymbol::Nine => "9",
            CardSymbol::Ten => "10",
            CardSymbol::Jack => "J",
            CardSymbol::Queen => "Q",
            CardSymbol::King => "K",
        }
    }

    /// Column label in a strategy chart: tens collapse to "10", the Ace is "A".
    pub fn dealer_label(self) -> &'static str {
        match self.rank() {
            11 => "A",
            10 => "10",
            _ => self.as_str(),
        }
    }
}

impl fmt::Display for CardSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match against the symbol alphabet. Callers normalize case and whitespace first.
impl FromStr for CardSymbol {
    type Err = AdvisorError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        CardSymbol::ALL
            .iter()
            .copied()
            .find(|card| card.as_str() == symbol)
            .ok_or_else(|| AdvisorError::UnknownCard(symbol.to_string()))
    }
}
