use super::rank_counts::RankCounts;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use super::valued_card::ValuedCard;

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all scoring rules.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub cards: [ValuedCard; 5],
    pub counts: RankCounts,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[ValuedCard; 5]) -> Self {
        Self::with_counts(cards, RankCounts::from_cards(cards))
    }

    /// Analysis over externally supplied rank counts.
    pub fn with_counts(cards: &[ValuedCard; 5], counts: RankCounts) -> Self {
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(cards, &counts);
        Self { cards: *cards, counts, suit_info, straight_info }
    }

    /// Values of the ranks occurring `size` times, descending, then the kickers descending.
    ///
    /// Each grouping is a set, so two pairs contribute two values and a
    /// single pair contributes one.
    pub fn grouped_values(&self, size: u8) -> Vec<u8> {
        let mut values = self.counts.values_with_count(size);
        values.extend(self.counts.kickers());
        values
    }

    /// All five straight values, descending, honouring an ace-low straight.
    pub fn straight_values(&self) -> Vec<u8> {
        let ace_low = self.straight_info.ace_low;
        let mut values: Vec<u8> = self.cards.iter().map(|c| c.straight_value(ace_low)).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    }

    /// All five ace-high values, descending.
    pub fn card_values(&self) -> Vec<u8> {
        let mut values: Vec<u8> = self.cards.iter().map(|c| c.value()).collect();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    }
}
