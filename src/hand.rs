use serde::{Deserialize, Serialize};

use crate::deck::Card;

pub const BLACKJACK: u32 = 21;

/// Best total not exceeding 21 when one exists, plus whether an Ace is still
/// counted as 11.
fn evaluate(cards: &[Card]) -> (u32, bool) {
    let mut total = 0;
    let mut aces = 0;

    for card in cards {
        total += card.value() as u32;
        if card.is_ace() {
            aces += 1;
        }
    }

    while total > BLACKJACK && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    (total, aces > 0)
}

pub fn hand_value(cards: &[Card]) -> u32 {
    evaluate(cards).0
}

pub fn is_soft(cards: &[Card]) -> bool {
    evaluate(cards).1
}

/// Exactly an Ace and a ten-valued card. Three-card 21s do not count.
pub fn is_blackjack(cards: &[Card]) -> bool {
    match cards {
        [a, b] => (a.is_ace() && b.value() == 10) || (b.is_ace() && a.value() == 10),
        _ => false,
    }
}

pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > BLACKJACK
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Hand { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u32 {
        hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }
}
