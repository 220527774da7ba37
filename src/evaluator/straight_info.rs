use super::rank_counts::RankCounts;
use super::valued_card::ValuedCard;
use crate::cards::Rank;

/// Which straight shape a hand formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StraightKind {
    /// Five consecutive ranks without an Ace.
    Standard,
    /// A-2-3-4-5, Ace plays low.
    Wheel,
    /// 10-J-Q-K-A, Ace plays high.
    Broadway,
}

/// Whether a hand is a straight and whether its Ace plays low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub ace_low: bool,
    pub kind: Option<StraightKind>,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, ace_low: false, kind: None };

    /// Detect a straight from five cards and their rank counts.
    ///
    /// Ace-high arithmetic cannot see the wheel, so the two Ace shapes are
    /// checked on their own after the plain max - min test.
    pub fn detect(cards: &[ValuedCard; 5], counts: &RankCounts) -> Self {
        if counts.distinct() != 5 {
            return Self::NONE;
        }

        let mut values = cards.map(|c| c.value());
        values.sort_unstable_by(|a, b| b.cmp(a));
        let (highest, second, lowest) = (values[0], values[1], values[4]);
        let has_ace = counts.contains(Rank::Ace);
        let has_king = counts.contains(Rank::King);

        if !has_ace && highest - lowest == 4 {
            return Self::found(StraightKind::Standard);
        }
        if has_ace && second == 5 && second - lowest == 3 {
            return Self::found(StraightKind::Wheel);
        }
        if has_ace && has_king && lowest == 10 {
            return Self::found(StraightKind::Broadway);
        }
        Self::NONE
    }

    fn found(kind: StraightKind) -> Self {
        StraightInfo { is_straight: true, ace_low: kind == StraightKind::Wheel, kind: Some(kind) }
    }
}
