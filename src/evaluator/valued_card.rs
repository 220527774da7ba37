use crate::cards::{Card, Rank, Suit};
use std::fmt;

/// Numeric value of a rank. The Ace is 14 unless `ace_low` is requested.
pub const fn rank_value(rank: Rank, ace_low: bool) -> u8 {
    match rank {
        Rank::Ace if ace_low => 1,
        Rank::Ace => 14,
        other => other.ordinal(),
    }
}

/// A card viewed through poker values.
///
/// ```
/// use aces_high_poker::cards::{Card, Rank, Suit};
/// use aces_high_poker::evaluator::ValuedCard;
///
/// let ace = ValuedCard::new(Card::new(Suit::Spades, Rank::Ace));
/// assert_eq!(ace.value(), 14);
/// assert_eq!(ace.straight_value(true), 1);
/// assert_eq!(ace.straight_value(false), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValuedCard {
    card: Card,
}

impl ValuedCard {
    pub const fn new(card: Card) -> Self {
        Self { card }
    }

    pub const fn card(&self) -> Card {
        self.card
    }

    pub const fn rank(&self) -> Rank {
        self.card.rank()
    }

    pub const fn suit(&self) -> Suit {
        self.card.suit()
    }

    /// Ace-high value: 2..=14.
    pub const fn value(&self) -> u8 {
        rank_value(self.card.rank(), false)
    }

    /// Value used when ordering a straight; 1 for an Ace in an ace-low straight.
    pub const fn straight_value(&self, ace_low: bool) -> u8 {
        rank_value(self.card.rank(), ace_low)
    }
}

impl From<Card> for ValuedCard {
    fn from(card: Card) -> Self {
        Self::new(card)
    }
}

impl fmt::Display for ValuedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.card, f)
    }
}
