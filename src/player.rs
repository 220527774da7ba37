use crate::cards::Card;
use crate::evaluator::{EvalError, Score};
use crate::hand::{Hand, HandError};
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("player {0} has no hand to score")]
    NoHand(String),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// A named seat holding at most one hand and its last score.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Option<Hand>,
    pub(crate) score: Option<Score>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), hand: None, score: None }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's hand, if dealt
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Returns the player's last score, if scored
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    /// Take a freshly dealt hand, discarding any previous hand and score.
    pub fn accept_cards(&mut self, cards: Vec<Card>) -> Result<(), PlayerError> {
        let hand = Hand::try_new(cards)?;
        self.hand = Some(hand);
        self.score = None;
        Ok(())
    }

    /// Classify the current hand and keep the result.
    ///
    /// ```
    /// use aces_high_poker::cards::parse_cards;
    /// use aces_high_poker::evaluator::Category;
    /// use aces_high_poker::player::Player;
    ///
    /// let mut bob = Player::new("Bob");
    /// bob.accept_cards(parse_cards("Kc 4d 4c 4s 4h").unwrap()).unwrap();
    /// let score = bob.score_hand().unwrap();
    /// assert_eq!(score.category, Category::FourOfAKind);
    /// assert_eq!(score.tiebreak(), &[4, 13]);
    /// ```
    pub fn score_hand(&mut self) -> Result<Score, PlayerError> {
        let hand = self.hand.as_ref().ok_or_else(|| PlayerError::NoHand(self.name.clone()))?;
        let score = hand.score()?;
        log::debug!("{} scored {}", self.name, score);
        self.score = Some(score);
        Ok(score)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.hand {
            Some(hand) => write!(f, "{}: [{}]", self.name, hand),
            None => write!(f, "{}: (no hand)", self.name),
        }
    }
}
