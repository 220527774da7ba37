use crate::deck::{Deck, DeckError};
use crate::evaluator::Score;
use crate::hand::HAND_SIZE;
use crate::player::{Player, PlayerError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("dealing failed: {0}")]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Player(#[from] PlayerError),
}

/// One deal of five cards to each player from a freshly shuffled deck.
#[derive(Debug)]
#[non_exhaustive]
pub struct Round {
    pub(crate) players: Vec<Player>,
    pub(crate) deck: Deck,
}

impl Round {
    /// Start a round with a deck shuffled by the thread-local RNG.
    pub fn new(players: Vec<Player>) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle();
        Self { players, deck }
    }

    /// Start a round with a reproducible shuffle.
    pub fn seeded(players: Vec<Player>, seed: u64) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        Self { players, deck }
    }

    /// Returns the players in seat order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Returns the round's deck
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Deal a hand to every player in seat order.
    ///
    /// ```
    /// use aces_high_poker::player::Player;
    /// use aces_high_poker::round::Round;
    ///
    /// let mut round = Round::seeded(vec![Player::new("Bob"), Player::new("Alice")], 7);
    /// round.deal_hands().unwrap();
    /// assert_eq!(round.players()[0].hand().unwrap().len(), 5);
    /// assert_eq!(round.deck().len(), 42);
    /// ```
    pub fn deal_hands(&mut self) -> Result<(), RoundError> {
        let needed = HAND_SIZE * self.players.len();
        if needed > self.deck.len() {
            return Err(DeckError::Underflow { requested: needed, remaining: self.deck.len() }.into());
        }
        for player in self.players.iter_mut() {
            let cards = self.deck.deal(HAND_SIZE)?;
            log::debug!("dealt {} cards to {}", cards.len(), player.name());
            player.accept_cards(cards)?;
        }
        Ok(())
    }

    /// Score every player's hand and return the scores in seat order.
    pub fn score_hands(&mut self) -> Result<Vec<Score>, RoundError> {
        let mut scores = Vec::with_capacity(self.players.len());
        for player in self.players.iter_mut() {
            scores.push(player.score_hand()?);
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: usize) -> Vec<Player> {
        (1..=n).map(|i| Player::new(format!("P{i}"))).collect()
    }

    #[test]
    fn round_has_players_and_full_deck() {
        let round = Round::new(players(2));
        assert_eq!(round.players().len(), 2);
        assert_eq!(round.players()[0].name(), "P1");
        assert_eq!(round.deck().len(), 52);
    }

    #[test]
    fn deals_five_cards_each() {
        let mut round = Round::seeded(players(2), 3);
        round.deal_hands().unwrap();
        for p in round.players() {
            assert_eq!(p.hand().map(|h| h.len()), Some(5));
        }
        assert_eq!(round.deck().len(), 42);
    }

    #[test]
    fn too_many_players_underflow_without_dealing() {
        let mut round = Round::seeded(players(11), 3);
        let err = round.deal_hands().unwrap_err();
        assert_eq!(err, RoundError::Deck(DeckError::Underflow { requested: 55, remaining: 52 }));
        assert!(round.players().iter().all(|p| p.hand().is_none()));
        assert_eq!(round.deck().len(), 52);
    }

    #[test]
    fn scoring_before_dealing_fails() {
        let mut round = Round::seeded(players(1), 3);
        let err = round.score_hands().unwrap_err();
        assert!(matches!(err, RoundError::Player(PlayerError::NoHand(_))));
    }

    #[test]
    fn scores_follow_seat_order() {
        let mut round = Round::seeded(players(3), 11);
        round.deal_hands().unwrap();
        let scores = round.score_hands().unwrap();
        assert_eq!(scores.len(), 3);
        for (p, s) in round.players().iter().zip(&scores) {
            assert_eq!(p.score(), Some(*s));
        }
    }
}
