use serde::{Deserialize, Serialize};

use crate::error::{validate_wager, GameError};
use crate::hand::Hand;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Blackjack,
    Win,
    Lose,
    Push,
    Bust,
}

/// Settlement of a finished round. `payout` is everything handed back to the
/// player, stake included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub result: OutcomeKind,
    pub player_total: u32,
    pub dealer_total: u32,
    pub payout: i64,
    pub message: String,
}

impl Outcome {
    /// Chips gained or lost against the stake.
    pub fn net(&self, bet: i64) -> i64 {
        self.payout.saturating_sub(bet)
    }
}

pub fn can_double_down(hand: &Hand, balance: i64, bet: i64) -> Result<bool, GameError> {
    validate_wager(bet)?;
    Ok(hand.len() == 2 && balance >= bet)
}

/// A doubled hand never counts as a blackjack.
pub fn resolve_round(
    player: &Hand,
    dealer: &Hand,
    bet: i64,
    was_doubled: bool,
) -> Result<Outcome, GameError> {
    validate_wager(bet)?;

    let player_total = player.value();
    let dealer_total = dealer.value();
    let player_blackjack = !was_doubled && player.is_blackjack();
    let win = bet.saturating_mul(2);

    let (result, payout, message) = if player.is_bust() {
        (
            OutcomeKind::Bust,
            0,
            format!("Bust with {player_total}. You lose {bet} chips."),
        )
    } else if dealer.is_bust() {
        (
            OutcomeKind::Win,
            win,
            format!("Dealer busts with {dealer_total}. You win {win} chips!"),
        )
    } else if player_blackjack && dealer.is_blackjack() {
        (
            OutcomeKind::Push,
            bet,
            format!("Both have blackjack. Push, your {bet} chips are returned."),
        )
    } else if player_blackjack {
        let payout = bet.saturating_mul(2).saturating_add(bet / 2);
        (
            OutcomeKind::Blackjack,
            payout,
            format!("Blackjack! You win {payout} chips!"),
        )
    } else if dealer.is_blackjack() {
        (
            OutcomeKind::Lose,
            0,
            format!("Dealer has blackjack. You lose {bet} chips."),
        )
    } else if player_total > dealer_total {
        (
            OutcomeKind::Win,
            win,
            format!("{player_total} beats {dealer_total}. You win {win} chips!"),
        )
    } else if player_total < dealer_total {
        (
            OutcomeKind::Lose,
            0,
            format!("Dealer's {dealer_total} beats {player_total}. You lose {bet} chips."),
        )
    } else {
        (
            OutcomeKind::Push,
            bet,
            format!("Push at {player_total}. Your {bet} chips are returned."),
        )
    };

    Ok(Outcome {
        result,
        player_total,
        dealer_total,
        payout,
        message,
    })
}
