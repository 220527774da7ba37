//! aces-high-poker: five-card poker hand classification
//!
//! Goals:
//! - Classify any 5-card hand into one of nine categories
//! - Produce a tie-break vector so hands of the same category compare directly
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: score a hand
//! ```
//! use aces_high_poker::cards::{Card, Rank, Suit};
//! use aces_high_poker::evaluator::Category;
//! use aces_high_poker::hand::Hand;
//!
//! let hand = Hand::try_new(vec![
//!     Card::new(Suit::Diamonds, Rank::Ace),
//!     Card::new(Suit::Diamonds, Rank::Two),
//!     Card::new(Suit::Spades, Rank::Three),
//!     Card::new(Suit::Clubs, Rank::Four),
//!     Card::new(Suit::Spades, Rank::Five),
//! ]).unwrap();
//!
//! let score = hand.score().unwrap();
//! assert_eq!(score.category, Category::Straight);
//! assert_eq!(score.tiebreak(), &[5, 4, 3, 2, 1]);
//! ```
//!
//! ## Dealing a round
//! ```
//! use aces_high_poker::player::Player;
//! use aces_high_poker::round::Round;
//!
//! let mut round = Round::seeded(vec![Player::new("Bob"), Player::new("Alice")], 42);
//! round.deal_hands().unwrap();
//! let scores = round.score_hands().unwrap();
//! assert_eq!(scores.len(), 2);
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod player;
pub mod round;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
