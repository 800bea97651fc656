use rand::{rngs::SmallRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    deck::{Card, Rank, Suit},
    game::Round,
    hand::{hand_value, Hand},
    outcome::{can_double_down, resolve_round, Outcome},
};

#[derive(Debug, Deserialize)]
pub struct StartRoundInput {
    pub bet: i64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub balance: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    Hit,
    Stand,
    Double,
}

#[derive(Debug, Deserialize)]
pub struct RoundActionInput {
    pub round: Round,
    pub action: PlayerAction,
    #[serde(default)]
    pub balance: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveInput {
    pub player: Hand,
    pub dealer: Hand,
    pub bet: i64,
    #[serde(default)]
    pub doubled: bool,
}

#[derive(Debug, Deserialize)]
pub struct DoubleDownInput {
    pub player: Hand,
    pub balance: i64,
    pub bet: i64,
}

/// Card as handed to the message renderer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub suit: Suit,
    pub rank: Rank,
    pub value: u8,
    pub label: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        CardView {
            suit: card.suit(),
            rank: card.rank(),
            value: card.value(),
            label: card.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundView {
    pub round: Round,
    pub player_cards: Vec<CardView>,
    pub dealer_cards: Vec<CardView>,
    pub player_total: u32,
    pub player_soft: bool,
    pub dealer_total: u32,
    pub can_double_down: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl RoundView {
    fn new(round: Round, balance: Option<i64>) -> Self {
        let dealer_visible = round.visible_dealer_cards();
        RoundView {
            player_cards: round.player().cards().iter().map(CardView::from).collect(),
            dealer_cards: dealer_visible.iter().map(CardView::from).collect(),
            player_total: round.player().value(),
            player_soft: round.player().is_soft(),
            dealer_total: hand_value(dealer_visible),
            can_double_down: balance.is_some_and(|b| round.can_double_down(b)),
            outcome: round.outcome().cloned(),
            round,
        }
    }
}

pub fn start_round(input: StartRoundInput) -> Result<RoundView, String> {
    let mut rng = match input.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let round = Round::start(&mut rng, input.bet).map_err(|err| err.to_string())?;
    Ok(RoundView::new(round, input.balance))
}

pub fn apply_action(input: RoundActionInput) -> Result<RoundView, String> {
    let mut round = input.round;
    match input.action {
        PlayerAction::Hit => round.hit().map(|_| ()),
        PlayerAction::Stand => round.stand().map(|_| ()),
        PlayerAction::Double => {
            let balance = input.balance.ok_or("balance is required to double down")?;
            round.double_down(balance).map(|_| ())
        }
    }
    .map_err(|err| err.to_string())?;
    Ok(RoundView::new(round, input.balance))
}

pub fn resolve(input: ResolveInput) -> Result<Outcome, String> {
    resolve_round(&input.player, &input.dealer, input.bet, input.doubled)
        .map_err(|err| err.to_string())
}

pub fn check_double_down(input: DoubleDownInput) -> Result<bool, String> {
    can_double_down(&input.player, input.balance, input.bet).map_err(|err| err.to_string())
}
