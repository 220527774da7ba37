pub(crate) mod hand_analysis;
pub(crate) mod rank_counts;
pub(crate) mod rules;
pub(crate) mod straight_info;
pub(crate) mod suit_info;
pub(crate) mod valued_card;

pub use hand_analysis::HandAnalysis;
pub use rank_counts::RankCounts;
pub use rules::{ScoreRule, RULES};
pub use straight_info::{StraightInfo, StraightKind};
pub use suit_info::SuitInfo;
pub use valued_card::{rank_value, ValuedCard};

use crate::cards::Card;
use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tie-break values, most significant first. Holds at most five entries.
#[derive(Clone, Copy)]
pub struct TieBreak {
    values: [u8; 5],
    len: u8,
}

impl TieBreak {
    pub const CAPACITY: usize = 5;

    /// Take up to [`TieBreak::CAPACITY`] values in the given order.
    pub fn from_values(values: &[u8]) -> Self {
        debug_assert!(values.len() <= Self::CAPACITY, "tie-break longer than a hand");
        let len = values.len().min(Self::CAPACITY);
        let mut buf = [0u8; 5];
        buf[..len].copy_from_slice(&values[..len]);
        Self { values: buf, len: len as u8 }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }
}

impl PartialEq for TieBreak {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for TieBreak {}

impl Ord for TieBreak {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for TieBreak {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for TieBreak {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Classification result. Ordered by category, then tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Score {
    pub category: Category,
    pub tiebreak: TieBreak,
}

impl Score {
    pub fn new(category: Category, tiebreak: &[u8]) -> Self {
        Self { category, tiebreak: TieBreak::from_values(tiebreak) }
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    pub fn tiebreak(&self) -> &[u8] {
        self.tiebreak.as_slice()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.tiebreak)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("no scoring rule matched hand [{0}]")]
    NoRuleMatched(String),
}

/// Run `rules` in order and return the first score produced.
pub(crate) fn score_with(
    rules: &[&dyn ScoreRule],
    analysis: &HandAnalysis,
) -> Result<Score, EvalError> {
    for rule in rules {
        if let Some(score) = rule.apply(analysis) {
            log::trace!("rule {} scored {}", rule.name(), score);
            return Ok(score);
        }
    }
    let cards: Vec<String> = analysis.cards.iter().map(ToString::to_string).collect();
    let cards = cards.join(", ");
    log::error!("rule chain exhausted for [{cards}]");
    Err(EvalError::NoRuleMatched(cards))
}

/// Classify a hand into its category and tie-break vector.
///
/// ```
/// use aces_high_poker::evaluator::{classify, Category};
/// use aces_high_poker::hand::Hand;
///
/// let hand: Hand = "Ad 9c Ah 9h 9s".parse().unwrap();
/// let score = classify(&hand).unwrap();
/// assert_eq!(score.category, Category::FullHouse);
/// assert_eq!(score.tiebreak(), &[9, 14]);
/// ```
pub fn classify(hand: &Hand) -> Result<Score, EvalError> {
    let analysis = HandAnalysis::new(hand.valued_cards());
    score_with(&RULES, &analysis)
}

/// Classify exactly five raw cards.
pub fn evaluate_five(cards: &[Card; 5]) -> Result<Score, EvalError> {
    let analysis = HandAnalysis::new(&cards.map(ValuedCard::new));
    score_with(&RULES, &analysis)
}

/// Compare two hands by score.
///
/// ```
/// use aces_high_poker::evaluator::compare_hands;
/// use aces_high_poker::hand::Hand;
/// use std::cmp::Ordering;
///
/// let flush: Hand = "Kc 5c 3c 8c 9c".parse().unwrap();
/// let straight: Hand = "2d 4c 3s 6d 5s".parse().unwrap();
/// assert_eq!(compare_hands(&flush, &straight).unwrap(), Ordering::Greater);
/// ```
pub fn compare_hands(a: &Hand, b: &Hand) -> Result<Ordering, EvalError> {
    let sa = classify(a)?;
    let sb = classify(b)?;
    Ok(sa.cmp(&sb))
}
