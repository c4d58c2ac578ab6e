use serde::{Deserialize, Serialize};

use crate::{
    card::CardSymbol,
    error::AdvisorError,
    hand::compute_value,
    strategy::{decide, Decision},
};

/// Deck counts offered by the table selector.
pub const DECK_COUNTS: [u8; 5] = [1, 2, 4, 6, 8];

fn default_num_decks() -> u8 {
    6
}

/// Raw form fields as typed by the player.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceInput {
    pub player_hand: String,
    pub dealer_upcard: String,
    #[serde(default = "default_num_decks")]
    pub num_decks: u8,
}

/// Already-parsed cards, for callers that hold symbols rather than text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionInput {
    pub player_hand: Vec<CardSymbol>,
    pub dealer_upcard: CardSymbol,
    #[serde(default = "default_num_decks")]
    pub num_decks: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub hand_value: u16,
    pub is_soft: bool,
    pub decision: Decision,
    pub player_cards: Vec<CardSymbol>,
    pub dealer_card: CardSymbol,
    pub num_decks: u8,
}

fn normalize(token: &str) -> String {
    token.trim().to_uppercase()
}

/// Splits comma-separated card text. Every unrecognized token is reported, in order.
pub fn parse_hand(text: &str) -> Result<Vec<CardSymbol>, AdvisorError> {
    let mut cards = Vec::new();
    let mut invalid = Vec::new();
    for token in text.split(',').map(normalize) {
        match token.parse::<CardSymbol>() {
            Ok(card) => cards.push(card),
            Err(_) => invalid.push(token),
        }
    }
    if !invalid.is_empty() {
        return Err(AdvisorError::InvalidHandCards(invalid));
    }
    Ok(cards)
}

pub fn parse_upcard(text: &str) -> Result<CardSymbol, AdvisorError> {
    let token = normalize(text);
    token
        .parse()
        .map_err(|_| AdvisorError::InvalidDealerUpcard(token))
}

pub fn check_deck_count(num_decks: u8) -> Result<u8, AdvisorError> {
    if DECK_COUNTS.contains(&num_decks) {
        Ok(num_decks)
    } else {
        Err(AdvisorError::UnsupportedDeckCount(num_decks))
    }
}

pub fn advise(input: AdviceInput) -> Result<Advice, AdvisorError> {
    if input.player_hand.trim().is_empty() || input.dealer_upcard.trim().is_empty() {
        return Err(AdvisorError::MissingInput);
    }
    let player_cards = parse_hand(&input.player_hand)?;
    let dealer_card = parse_upcard(&input.dealer_upcard)?;
    let num_decks = check_deck_count(input.num_decks)?;

    let valuation = compute_value(&player_cards);
    let decision = decide(&player_cards, dealer_card, num_decks);

    Ok(Advice {
        hand_value: valuation.value,
        is_soft: valuation.is_soft,
        decision,
        player_cards,
        dealer_card,
        num_decks,
    })
}
