use super::valued_card::{rank_value, ValuedCard};
use crate::cards::Rank;

/// Occurrence count of each rank in a hand.
///
/// For a 5-card hand the counts sum to 5 over 1 to 5 distinct ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankCounts {
    // indexed by Rank::ordinal, slot 0 unused
    counts: [u8; 14],
}

impl RankCounts {
    pub fn from_cards(cards: &[ValuedCard]) -> Self {
        let mut counts = [0u8; 14];
        for card in cards {
            counts[card.rank().ordinal() as usize] += 1;
        }
        Self { counts }
    }

    /// Build counts directly from (rank, count) pairs.
    pub fn from_pairs(pairs: &[(Rank, u8)]) -> Self {
        let mut counts = [0u8; 14];
        for &(rank, count) in pairs {
            counts[rank.ordinal() as usize] += count;
        }
        Self { counts }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.ordinal() as usize]
    }

    /// Number of distinct ranks present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Total number of cards counted.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn contains(&self, rank: Rank) -> bool {
        self.count(rank) > 0
    }

    /// Present ranks with their counts, in deck order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ALL.into_iter().map(move |r| (r, self.count(r))).filter(|&(_, c)| c > 0)
    }

    /// How many distinct ranks occur exactly `size` times.
    pub fn groups_of(&self, size: u8) -> usize {
        self.iter().filter(|&(_, c)| c == size).count()
    }

    /// Ace-high values of the ranks occurring exactly `size` times, descending.
    pub fn values_with_count(&self, size: u8) -> Vec<u8> {
        let mut values: Vec<u8> =
            self.iter().filter(|&(_, c)| c == size).map(|(r, _)| rank_value(r, false)).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    }

    /// Singleton values, descending.
    pub fn kickers(&self) -> Vec<u8> {
        self.values_with_count(1)
    }

    /// Every counted card's ace-high value, descending, duplicates kept.
    pub fn values_desc(&self) -> Vec<u8> {
        let mut values: Vec<u8> = self
            .iter()
            .flat_map(|(r, c)| std::iter::repeat(rank_value(r, false)).take(c as usize))
            .collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn valued(cards: &[(Suit, Rank)]) -> Vec<ValuedCard> {
        cards.iter().map(|&(s, r)| ValuedCard::new(Card::new(s, r))).collect()
    }

    #[test]
    fn counts_sum_to_hand_size() {
        let cards = valued(&[
            (Suit::Clubs, Rank::Two),
            (Suit::Clubs, Rank::Four),
            (Suit::Hearts, Rank::Four),
            (Suit::Clubs, Rank::Nine),
            (Suit::Clubs, Rank::Jack),
        ]);
        let counts = RankCounts::from_cards(&cards);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.distinct(), 4);
        assert_eq!(counts.count(Rank::Four), 2);
        assert_eq!(counts.count(Rank::King), 0);
        assert_eq!(counts.groups_of(2), 1);
        assert_eq!(counts.groups_of(1), 3);
    }

    #[test]
    fn iter_skips_missing_ranks() {
        let counts = RankCounts::from_pairs(&[(Rank::King, 1), (Rank::Ace, 4)]);
        let pairs: Vec<(Rank, u8)> = counts.iter().collect();
        assert_eq!(pairs, vec![(Rank::Ace, 4), (Rank::King, 1)]);
        assert!(counts.contains(Rank::Ace));
        assert!(!counts.contains(Rank::Queen));
    }

    #[test]
    fn values_with_count_are_ace_high_and_descending() {
        let counts = RankCounts::from_pairs(&[(Rank::Ace, 2), (Rank::Nine, 2), (Rank::Three, 1)]);
        assert_eq!(counts.values_with_count(2), vec![14, 9]);
        assert_eq!(counts.kickers(), vec![3]);
        assert!(counts.values_with_count(3).is_empty());
    }

    #[test]
    fn values_desc_keeps_duplicates() {
        let counts = RankCounts::from_pairs(&[(Rank::Nine, 3), (Rank::Ace, 2)]);
        assert_eq!(counts.values_desc(), vec![14, 14, 9, 9, 9]);
    }

    #[test]
    fn all_five_of_one_rank_is_counted() {
        let counts = RankCounts::from_pairs(&[(Rank::Seven, 5)]);
        assert_eq!(counts.distinct(), 1);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.groups_of(5), 1);
    }
}
