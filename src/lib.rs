use wasm_bindgen::prelude::*;

pub mod advice;
pub mod card;
mod console;
pub mod error;
pub mod hand;
pub mod strategy;

pub use advice::{Advice, AdviceInput, DecisionInput};
pub use card::CardSymbol;
pub use error::AdvisorError;
pub use hand::{compute_value, HandValuation};
pub use strategy::{decide, Decision, StrategyChart};

#[wasm_bindgen(js_name = computeValue)]
pub fn compute_value_js(hand: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let cards: Vec<CardSymbol> = serde_wasm_bindgen::from_value(hand.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let valuation = compute_value(&cards);

    serde_wasm_bindgen::to_value(&valuation)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen(js_name = getDecision)]
pub fn get_decision(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: DecisionInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let decision = decide(&input.player_hand, input.dealer_upcard, input.num_decks);
    console::debug(&format!(
        "{} vs {}: {decision}",
        compute_value(&input.player_hand).label(),
        input.dealer_upcard.dealer_label()
    ));

    serde_wasm_bindgen::to_value(&decision)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn advise(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: AdviceInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let advice = advice::advise(input).map_err(|err| {
        console::warn(&format!("rejected input: {err}"));
        JsValue::from_str(&err.to_string())
    })?;
    console::debug(&format!(
        "{:?} vs {}: {} {}",
        advice.player_cards, advice.dealer_card, advice.hand_value, advice.decision
    ));

    serde_wasm_bindgen::to_value(&advice)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen(js_name = strategyChart)]
pub fn strategy_chart() -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    serde_wasm_bindgen::to_value(&StrategyChart::basic())
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}
