use wasm_bindgen::prelude::*;

pub mod api;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
mod log;
pub mod outcome;

pub use deck::{build_shuffled_deck, Card, Deck, Rank, Suit, DECK_SIZE};
pub use error::GameError;
pub use game::{play_dealer, Round, DEALER_STANDS_ON};
pub use hand::{hand_value, is_blackjack, is_bust, is_soft, Hand};
pub use outcome::{can_double_down, resolve_round, Outcome, OutcomeKind};

#[wasm_bindgen]
pub fn start_round(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: api::StartRoundInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let view = api::start_round(input)
        .map_err(|err| JsValue::from_str(&format!("Round failed: {err}")))?;

    serde_wasm_bindgen::to_value(&view)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn round_action(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: api::RoundActionInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let view = api::apply_action(input)
        .map_err(|err| JsValue::from_str(&format!("Round failed: {err}")))?;

    serde_wasm_bindgen::to_value(&view)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn resolve(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: api::ResolveInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let outcome = api::resolve(input)
        .map_err(|err| JsValue::from_str(&format!("Resolve failed: {err}")))?;

    serde_wasm_bindgen::to_value(&outcome)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn double_down_allowed(params: &JsValue) -> Result<bool, JsValue> {
    console_error_panic_hook::set_once();
    let input: api::DoubleDownInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    api::check_double_down(input)
        .map_err(|err| JsValue::from_str(&format!("Double down check failed: {err}")))
}
