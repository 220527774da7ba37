use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("cannot deal {requested} cards, only {remaining} remain")]
    Underflow { requested: usize, remaining: usize },
}

/// A standard 52-card deck. The top of the deck is the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use aces_high_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle with the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        log::debug!("shuffling deck with seed {seed}");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        log::debug!("shuffling {} cards", self.cards.len());
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return `n` cards from the top of the deck.
    ///
    /// Fails without touching the deck when fewer than `n` cards remain.
    ///
    /// ```
    /// use aces_high_poker::deck::{Deck, DeckError};
    ///
    /// let mut deck = Deck::standard();
    /// assert_eq!(deck.deal(5).unwrap().len(), 5);
    /// assert_eq!(deck.len(), 47);
    /// assert!(matches!(deck.deal(48), Err(DeckError::Underflow { requested: 48, remaining: 47 })));
    /// ```
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DeckError::Underflow { requested: n, remaining });
        }
        let mut dealt = self.cards.split_off(remaining - n);
        // top card first
        dealt.reverse();
        log::debug!("dealt {n} cards, {} remain", self.cards.len());
        Ok(dealt)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
