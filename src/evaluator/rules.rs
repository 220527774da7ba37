use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, Score};

/// One link of the classification chain: recognises a shape and builds its score.
///
/// Rules are pure over the analysis; none depends on another having declined.
pub trait ScoreRule {
    fn name(&self) -> &'static str;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build(&self, analysis: &HandAnalysis) -> Score;

    /// The rule's score, or `None` if the rule declines.
    fn apply(&self, analysis: &HandAnalysis) -> Option<Score> {
        if self.detect(analysis) {
            Some(self.build(analysis))
        } else {
            None
        }
    }
}

// ============================================================================
// Rule implementations (in chain order)
// ============================================================================

/// Straight flush, straight or flush: rank contiguity and suit uniformity.
pub struct SequenceAndSuitRule;

impl ScoreRule for SequenceAndSuitRule {
    fn name(&self) -> &'static str {
        "sequence-and-suit"
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight || analysis.suit_info.is_flush
    }

    fn build(&self, analysis: &HandAnalysis) -> Score {
        match (analysis.straight_info.is_straight, analysis.suit_info.is_flush) {
            (true, true) => Score::new(Category::StraightFlush, &analysis.straight_values()),
            (true, false) => Score::new(Category::Straight, &analysis.straight_values()),
            _ => Score::new(Category::Flush, &analysis.card_values()),
        }
    }
}

/// Four of a kind: shape {4, 1}.
pub struct FourOfAKindRule;

impl ScoreRule for FourOfAKindRule {
    fn name(&self) -> &'static str {
        "four-of-a-kind"
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.counts.groups_of(4) == 1 && analysis.counts.distinct() == 2
    }

    fn build(&self, analysis: &HandAnalysis) -> Score {
        Score::new(Category::FourOfAKind, &analysis.grouped_values(4))
    }
}

/// Full house: shape {3, 2}.
pub struct FullHouseRule;

impl ScoreRule for FullHouseRule {
    fn name(&self) -> &'static str {
        "full-house"
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        let counts = &analysis.counts;
        counts.groups_of(3) == 1 && counts.groups_of(2) == 1 && counts.distinct() == 2
    }

    fn build(&self, analysis: &HandAnalysis) -> Score {
        let mut values = analysis.grouped_values(3);
        values.extend(analysis.grouped_values(2));
        Score::new(Category::FullHouse, &values)
    }
}

/// Three of a kind: shape {3, 1, 1}.
pub struct ThreeOfAKindRule;

impl ScoreRule for ThreeOfAKindRule {
    fn name(&self) -> &'static str {
        "three-of-a-kind"
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.counts.groups_of(3) == 1 && analysis.counts.distinct() == 3
    }

    fn build(&self, analysis: &HandAnalysis) -> Score {
        Score::new(Category::ThreeOfAKind, &analysis.grouped_values(3))
    }
}

/// Two pair: shape {2, 2, 1}.
pub struct TwoPairRule;

impl ScoreRule for TwoPairRule {
    fn name(&self) -> &'static str {
        "two-pair"
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.counts.groups_of(2) == 2 && analysis.counts.distinct() == 3
    }

    fn build(&self, analysis: &HandAnalysis) -> Score {
        Score::new(Category::TwoPair, &analysis.grouped_values(2))
    }
}

/// One pair: shape {2, 1, 1, 1}.
pub struct PairRule;

impl ScoreRule for PairRule {
    fn name(&self) -> &'static str {
        "pair"
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.counts.groups_of(2) == 1 && analysis.counts.distinct() == 4
    }

    fn build(&self, analysis: &HandAnalysis) -> Score {
        Score::new(Category::Pair, &analysis.grouped_values(2))
    }
}

/// High card: fallback.
pub struct HighCardRule;

impl ScoreRule for HighCardRule {
    fn name(&self) -> &'static str {
        "high-card"
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }

    fn build(&self, analysis: &HandAnalysis) -> Score {
        Score::new(Category::HighCard, &analysis.card_values())
    }
}

// ============================================================================
// Static rule chain (in evaluation order)
// ============================================================================

pub const RULES: [&dyn ScoreRule; 7] = [
    &SequenceAndSuitRule,
    &FourOfAKindRule,
    &FullHouseRule,
    &ThreeOfAKindRule,
    &TwoPairRule,
    &PairRule,
    &HighCardRule,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::evaluator::rank_counts::RankCounts;
    use crate::evaluator::valued_card::ValuedCard;

    fn analyze(cards: [(Suit, Rank); 5]) -> HandAnalysis {
        HandAnalysis::new(&cards.map(|(s, r)| ValuedCard::new(Card::new(s, r))))
    }

    /// Mixed-suit, non-straight filler paired with synthetic counts.
    fn synthetic(pairs: &[(Rank, u8)]) -> HandAnalysis {
        let filler = [
            (Suit::Clubs, Rank::Two),
            (Suit::Diamonds, Rank::Four),
            (Suit::Hearts, Rank::Six),
            (Suit::Spades, Rank::Eight),
            (Suit::Clubs, Rank::Ten),
        ]
        .map(|(s, r)| ValuedCard::new(Card::new(s, r)));
        HandAnalysis::with_counts(&filler, RankCounts::from_pairs(pairs))
    }

    fn matching(analysis: &HandAnalysis) -> Vec<&'static str> {
        RULES.iter().filter(|r| r.detect(analysis)).map(|r| r.name()).collect()
    }

    #[test]
    fn four_of_a_kind_on_synthetic_counts() {
        let a = synthetic(&[(Rank::Four, 4), (Rank::King, 1)]);
        let score = FourOfAKindRule.apply(&a).unwrap();
        assert_eq!(score.category, Category::FourOfAKind);
        assert_eq!(score.tiebreak.as_slice(), &[4, 13]);
        assert_eq!(matching(&a), vec!["four-of-a-kind", "high-card"]);
    }

    #[test]
    fn full_house_on_synthetic_counts() {
        let a = synthetic(&[(Rank::Nine, 3), (Rank::Ace, 2)]);
        let score = FullHouseRule.apply(&a).unwrap();
        assert_eq!(score.category, Category::FullHouse);
        assert_eq!(score.tiebreak.as_slice(), &[9, 14]);
        assert_eq!(matching(&a), vec!["full-house", "high-card"]);
    }

    #[test]
    fn three_of_a_kind_on_synthetic_counts() {
        let a = synthetic(&[(Rank::Nine, 3), (Rank::Two, 1), (Rank::Four, 1)]);
        let score = ThreeOfAKindRule.apply(&a).unwrap();
        assert_eq!(score.tiebreak.as_slice(), &[9, 4, 2]);
        assert!(FullHouseRule.apply(&a).is_none());
    }

    #[test]
    fn two_pair_on_synthetic_counts() {
        let a = synthetic(&[(Rank::Ace, 2), (Rank::Nine, 2), (Rank::Three, 1)]);
        let score = TwoPairRule.apply(&a).unwrap();
        assert_eq!(score.tiebreak.as_slice(), &[14, 9, 3]);
        assert!(PairRule.apply(&a).is_none());
    }

    #[test]
    fn pair_on_synthetic_counts() {
        let a = synthetic(&[(Rank::Four, 2), (Rank::Two, 1), (Rank::Nine, 1), (Rank::Jack, 1)]);
        let score = PairRule.apply(&a).unwrap();
        assert_eq!(score.category, Category::Pair);
        assert_eq!(score.tiebreak.as_slice(), &[4, 11, 9, 2]);
        assert!(TwoPairRule.apply(&a).is_none());
    }

    #[test]
    fn high_card_always_matches() {
        let a = analyze([
            (Suit::Clubs, Rank::Ace),
            (Suit::Hearts, Rank::Three),
            (Suit::Clubs, Rank::Eight),
            (Suit::Clubs, Rank::Six),
            (Suit::Clubs, Rank::Four),
        ]);
        assert_eq!(matching(&a), vec!["high-card"]);
        let score = HighCardRule.apply(&a).unwrap();
        assert_eq!(score.tiebreak.as_slice(), &[14, 8, 6, 4, 3]);
    }

    #[test]
    fn sequence_rule_declines_without_straight_or_flush() {
        let a = synthetic(&[(Rank::Four, 2), (Rank::Two, 1), (Rank::Nine, 1), (Rank::Jack, 1)]);
        assert!(SequenceAndSuitRule.apply(&a).is_none());
    }

    #[test]
    fn sequence_rule_picks_category() {
        let flush = analyze([
            (Suit::Clubs, Rank::King),
            (Suit::Clubs, Rank::Five),
            (Suit::Clubs, Rank::Three),
            (Suit::Clubs, Rank::Eight),
            (Suit::Clubs, Rank::Nine),
        ]);
        let score = SequenceAndSuitRule.apply(&flush).unwrap();
        assert_eq!(score.category, Category::Flush);
        assert_eq!(score.tiebreak.as_slice(), &[13, 9, 8, 5, 3]);

        let straight = analyze([
            (Suit::Diamonds, Rank::Two),
            (Suit::Clubs, Rank::Four),
            (Suit::Spades, Rank::Three),
            (Suit::Diamonds, Rank::Six),
            (Suit::Spades, Rank::Five),
        ]);
        let score = SequenceAndSuitRule.apply(&straight).unwrap();
        assert_eq!(score.category, Category::Straight);
        assert_eq!(score.tiebreak.as_slice(), &[6, 5, 4, 3, 2]);

        let wheel_flush = analyze([
            (Suit::Spades, Rank::Two),
            (Suit::Spades, Rank::Four),
            (Suit::Spades, Rank::Three),
            (Suit::Spades, Rank::Ace),
            (Suit::Spades, Rank::Five),
        ]);
        let score = SequenceAndSuitRule.apply(&wheel_flush).unwrap();
        assert_eq!(score.category, Category::StraightFlush);
        assert_eq!(score.tiebreak.as_slice(), &[5, 4, 3, 2, 1]);
    }

    #[test]
    fn at_most_one_shape_rule_matches_real_hands() {
        let hands = [
            [
                (Suit::Clubs, Rank::King),
                (Suit::Diamonds, Rank::Four),
                (Suit::Clubs, Rank::Four),
                (Suit::Spades, Rank::Four),
                (Suit::Hearts, Rank::Four),
            ],
            [
                (Suit::Clubs, Rank::Two),
                (Suit::Clubs, Rank::Four),
                (Suit::Hearts, Rank::Four),
                (Suit::Spades, Rank::Nine),
                (Suit::Diamonds, Rank::Nine),
            ],
            [
                (Suit::Diamonds, Rank::Nine),
                (Suit::Diamonds, Rank::Jack),
                (Suit::Diamonds, Rank::King),
                (Suit::Diamonds, Rank::Queen),
                (Suit::Diamonds, Rank::Ten),
            ],
        ];
        for cards in hands {
            let a = analyze(cards);
            let non_fallback = RULES[..6].iter().filter(|r| r.detect(&a)).count();
            assert_eq!(non_fallback, 1);
        }
    }
}
