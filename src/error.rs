use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("deck is empty")]
    EmptyDeck,

    #[error("invalid wager: {bet} (must be positive)")]
    InvalidWager { bet: i64 },

    #[error("double down is only allowed on the first two cards with enough chips to cover it")]
    DoubleDownNotAllowed,

    #[error("round is already settled")]
    RoundSettled,

    #[error("corrupt deck: {0}")]
    CorruptDeck(String),
}

/// Rejects non-positive wagers.
pub fn validate_wager(bet: i64) -> Result<(), GameError> {
    if bet <= 0 {
        return Err(GameError::InvalidWager { bet });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_wager() {
        assert_eq!(validate_wager(1), Ok(()));
        assert_eq!(validate_wager(0), Err(GameError::InvalidWager { bet: 0 }));
        assert_eq!(validate_wager(-5), Err(GameError::InvalidWager { bet: -5 }));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(GameError::EmptyDeck.to_string(), "deck is empty");
        assert_eq!(
            GameError::InvalidWager { bet: -1 }.to_string(),
            "invalid wager: -1 (must be positive)"
        );
    }
}
