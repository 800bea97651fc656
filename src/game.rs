use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    deck::{Card, Deck},
    error::{validate_wager, GameError},
    hand::Hand,
    log::console_log,
    outcome::{can_double_down, resolve_round, Outcome},
};

pub const DEALER_STANDS_ON: u32 = 17;

/// Dealer draws until reaching 17, soft 17 included.
pub fn play_dealer(deck: &mut Deck, dealer: &mut Hand) -> Result<(), GameError> {
    while dealer.value() < DEALER_STANDS_ON {
        dealer.push(deck.draw()?);
    }
    console_log!("dealer stands on {}", dealer.value());
    Ok(())
}

/// One round of play. The session layer persists this between chat turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RoundSnapshot")]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    bet: i64,
    doubled: bool,
    outcome: Option<Outcome>,
}

/// Unchecked form of a persisted round.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoundSnapshot {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    bet: i64,
    #[serde(default)]
    doubled: bool,
    #[serde(default)]
    outcome: Option<Outcome>,
}

impl TryFrom<RoundSnapshot> for Round {
    type Error = GameError;

    fn try_from(snapshot: RoundSnapshot) -> Result<Self, Self::Error> {
        validate_wager(snapshot.bet)?;
        if snapshot.player.len() < 2 || snapshot.dealer.len() < 2 {
            return Err(GameError::CorruptDeck("hands must hold at least two cards".to_string()));
        }

        let mut seen = HashSet::new();
        let all_cards = snapshot
            .deck
            .cards()
            .iter()
            .chain(snapshot.player.cards())
            .chain(snapshot.dealer.cards());
        for card in all_cards {
            if !seen.insert(*card) {
                return Err(GameError::CorruptDeck(format!("duplicate card {card}")));
            }
        }

        Ok(Round {
            deck: snapshot.deck,
            player: snapshot.player,
            dealer: snapshot.dealer,
            bet: snapshot.bet,
            doubled: snapshot.doubled,
            outcome: snapshot.outcome,
        })
    }
}

impl Round {
    pub fn start<R: Rng + ?Sized>(rng: &mut R, bet: i64) -> Result<Self, GameError> {
        Self::from_deck(Deck::shuffled(rng), bet)
    }

    pub fn from_deck(mut deck: Deck, bet: i64) -> Result<Self, GameError> {
        validate_wager(bet)?;
        let (player, dealer) = deck.deal_initial()?;
        console_log!("dealt round: bet {}, player {}", bet, player.value());
        Ok(Round {
            deck,
            player,
            dealer,
            bet,
            doubled: false,
            outcome: None,
        })
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current stake, doubled after a double down.
    pub fn bet(&self) -> i64 {
        self.bet
    }

    pub fn was_doubled(&self) -> bool {
        self.doubled
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_settled(&self) -> bool {
        self.outcome.is_some()
    }

    /// Face-up dealer cards: only the first card until the round settles.
    pub fn visible_dealer_cards(&self) -> &[Card] {
        if self.is_settled() {
            self.dealer.cards()
        } else {
            &self.dealer.cards()[..self.dealer.len().min(1)]
        }
    }

    pub fn can_double_down(&self, balance: i64) -> bool {
        !self.is_settled() && can_double_down(&self.player, balance, self.bet).unwrap_or(false)
    }

    /// Draws a card to the player. Returns the settlement if the player busts.
    pub fn hit(&mut self) -> Result<Option<&Outcome>, GameError> {
        self.ensure_open()?;
        let card = self.deck.draw()?;
        self.player.push(card);
        console_log!("player hits {}, total {}", card, self.player.value());

        if self.player.is_bust() {
            self.settle()?;
            return Ok(self.outcome.as_ref());
        }
        Ok(None)
    }

    pub fn stand(&mut self) -> Result<&Outcome, GameError> {
        self.ensure_open()?;
        // Busted and natural hands settle against the dealer's first two cards.
        let natural = !self.doubled && self.player.is_blackjack();
        if !self.player.is_bust() && !natural {
            play_dealer(&mut self.deck, &mut self.dealer)?;
        }
        self.settle()
    }

    /// Doubles the stake, takes exactly one card and stands.
    pub fn double_down(&mut self, balance: i64) -> Result<&Outcome, GameError> {
        self.ensure_open()?;
        if !can_double_down(&self.player, balance, self.bet)? {
            return Err(GameError::DoubleDownNotAllowed);
        }
        let card = self.deck.draw()?;
        self.bet = self.bet.saturating_mul(2);
        self.doubled = true;
        self.player.push(card);
        console_log!("player doubles to {}, draws {}", self.bet, card);
        self.stand()
    }

    fn ensure_open(&self) -> Result<(), GameError> {
        if self.is_settled() {
            return Err(GameError::RoundSettled);
        }
        Ok(())
    }

    fn settle(&mut self) -> Result<&Outcome, GameError> {
        let outcome = resolve_round(&self.player, &self.dealer, self.bet, self.doubled)?;
        console_log!("round settled: {:?}, payout {}", outcome.result, outcome.payout);
        Ok(&*self.outcome.insert(outcome))
    }
}
