use crate::cards::{parse_cards, Card};
use crate::evaluator::{classify, EvalError, RankCounts, Score, ValuedCard};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("must contain exactly {expected} cards, got {got}")]
    WrongCardCount { expected: usize, got: usize },
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Exactly five cards held by one player.
///
/// Duplicate cards are not rejected; a hand only guarantees its size.
///
/// ```
/// use aces_high_poker::cards::{Card, Rank, Suit};
/// use aces_high_poker::hand::{Hand, HandError};
///
/// let hand: Hand = "Ts Jh Qc Kd As".parse().unwrap();
/// assert_eq!(hand.len(), 5);
///
/// let short = Hand::try_new(vec![Card::new(Suit::Spades, Rank::Ten); 4]);
/// assert_eq!(short.unwrap_err(), HandError::WrongCardCount { expected: 5, got: 4 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [ValuedCard; HAND_SIZE],
}

impl Hand {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        Self::from_slice(&cards)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = slice
            .try_into()
            .map_err(|_| HandError::WrongCardCount { expected: HAND_SIZE, got: slice.len() })?;
        Ok(Self { cards: cards.map(ValuedCard::new) })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in the order they were dealt.
    pub fn cards(&self) -> [Card; HAND_SIZE] {
        self.cards.map(|c| c.card())
    }

    pub fn valued_cards(&self) -> &[ValuedCard; HAND_SIZE] {
        &self.cards
    }

    pub fn rank_frequencies(&self) -> RankCounts {
        RankCounts::from_cards(&self.cards)
    }

    /// Classify this hand. See [`classify`].
    pub fn score(&self) -> Result<Score, EvalError> {
        classify(self)
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
