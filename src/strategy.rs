use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::{
    card::CardSymbol,
    hand::{compute_value, HandValuation},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum Decision {
    Hit,
    Stand,
}

impl Decision {
    pub fn as_code(&self) -> &'static str {
        match self {
            Decision::Hit => "H",
            Decision::Stand => "S",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Hit => f.write_str("Hit"),
            Decision::Stand => f.write_str("Stand"),
        }
    }
}

/// Basic-strategy Hit/Stand advice for the player's hand against the dealer upcard.
///
/// `_num_decks` is accepted for callers that track the shoe size; the table
/// does not vary with it.
pub fn decide(player_hand: &[CardSymbol], dealer_upcard: CardSymbol, _num_decks: u8) -> Decision {
    decide_valuation(compute_value(player_hand), dealer_upcard)
}

/// Applies the rule table to a hand that has already been valued.
pub fn decide_valuation(valuation: HandValuation, dealer_upcard: CardSymbol) -> Decision {
    let dealer = dealer_upcard.rank();
    let HandValuation { value, is_soft } = valuation;

    if !is_soft {
        // A busted hand lands in the first arm and stands.
        match value {
            v if v >= 17 => Decision::Stand,
            v if v <= 11 => Decision::Hit,
            12 if matches!(dealer, 4..=6) => Decision::Stand,
            12 => Decision::Hit,
            13..=16 if dealer >= 7 => Decision::Hit,
            13..=16 => Decision::Stand,
            _ => Decision::Hit,
        }
    } else {
        match value {
            v if v >= 19 => Decision::Stand,
            v if v <= 17 => Decision::Hit,
            18 if matches!(dealer, 2 | 7 | 8) => Decision::Stand,
            18 => Decision::Hit,
            _ => Decision::Hit,
        }
    }
}

type StrategyTable = HashMap<String, HashMap<String, String>>;

const DEALER_COLUMNS: [CardSymbol; 10] = [
    CardSymbol::Two,
    CardSymbol::Three,
    CardSymbol::Four,
    CardSymbol::Five,
    CardSymbol::Six,
    CardSymbol::Seven,
    CardSymbol::Eight,
    CardSymbol::Nine,
    CardSymbol::Ten,
    CardSymbol::Ace,
];

/// The whole Hit/Stand table keyed by player total, then dealer label, holding
/// action codes ("H"/"S").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyChart {
    pub hard: StrategyTable,
    pub soft: StrategyTable,
}

impl StrategyChart {
    pub fn basic() -> Self {
        StrategyChart {
            hard: build_table(4..=21, false),
            soft: build_table(12..=21, true),
        }
    }

    pub fn lookup(&self, player: &HandValuation, dealer_upcard: CardSymbol) -> Option<Decision> {
        let table = if player.is_soft { &self.soft } else { &self.hard };
        let code = table
            .get(&player.value.to_string())?
            .get(dealer_upcard.dealer_label())?;
        match code.as_str() {
            "H" => Some(Decision::Hit),
            "S" => Some(Decision::Stand),
            _ => None,
        }
    }
}

fn build_table(totals: std::ops::RangeInclusive<u16>, is_soft: bool) -> StrategyTable {
    let mut table = HashMap::new();
    for value in totals {
        let valuation = HandValuation { value, is_soft };
        let row: HashMap<String, String> = DEALER_COLUMNS
            .iter()
            .map(|&dealer| {
                let decision = decide_valuation(valuation, dealer);
                (dealer.dealer_label().to_string(), decision.as_code().to_string())
            })
            .collect();
        table.insert(value.to_string(), row);
    }
    table
}
