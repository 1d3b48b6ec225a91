use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе.
///
/// Номер категории: 1 = сильнейшая (роял-флеш), 10 = старшая карта.
/// Меньший номер = лучшая рука.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandCategory {
    RoyalFlush = 1,
    StraightFlush = 2,
    FourOfAKind = 3,
    FullHouse = 4,
    Flush = 5,
    Straight = 6,
    ThreeOfAKind = 7,
    TwoPair = 8,
    Pair = 9,
    HighCard = 10,
}

impl HandCategory {
    /// Все категории от сильнейшей к слабейшей.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::Pair,
        HandCategory::HighCard,
    ];

    pub const fn rank_number(self) -> u8 {
        self as u8
    }

    pub const fn is_better_than(self, other: HandCategory) -> bool {
        self.rank_number() < other.rank_number()
    }

    /// Сравнение по силе: `Greater` = `self` сильнее.
    pub fn cmp_strength(self, other: HandCategory) -> Ordering {
        other.rank_number().cmp(&self.rank_number())
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Pair => "Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Готовая комбинация: категория + ранги, которые её задают, + кикеры.
///
/// Это единственный источник категории, тай-брейка и названия руки:
/// всё выводится отсюда через исчерпывающий `match`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MadeHand {
    RoyalFlush,
    StraightFlush { high: Rank },
    FourOfAKind { quads: Rank, kickers: Vec<Rank> },
    FullHouse { trips: Rank, pair: Rank },
    /// Пять старших карт флешевой масти.
    Flush { ranks: Vec<Rank> },
    Straight { high: Rank },
    ThreeOfAKind { trips: Rank, kickers: Vec<Rank> },
    TwoPair { high: Rank, low: Rank, kickers: Vec<Rank> },
    Pair { pair: Rank, kickers: Vec<Rank> },
    HighCard { ranks: Vec<Rank> },
}

/// Роял-флеш всегда сравнивается по фиксированной пятёрке.
const ROYAL_RANKS: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];

impl MadeHand {
    pub fn category(&self) -> HandCategory {
        match self {
            MadeHand::RoyalFlush => HandCategory::RoyalFlush,
            MadeHand::StraightFlush { .. } => HandCategory::StraightFlush,
            MadeHand::FourOfAKind { .. } => HandCategory::FourOfAKind,
            MadeHand::FullHouse { .. } => HandCategory::FullHouse,
            MadeHand::Flush { .. } => HandCategory::Flush,
            MadeHand::Straight { .. } => HandCategory::Straight,
            MadeHand::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            MadeHand::TwoPair { .. } => HandCategory::TwoPair,
            MadeHand::Pair { .. } => HandCategory::Pair,
            MadeHand::HighCard { .. } => HandCategory::HighCard,
        }
    }

    /// Ранги для тай-брейка, от самого значимого к наименее значимому.
    pub fn tiebreak_ranks(&self) -> Vec<Rank> {
        match self {
            MadeHand::RoyalFlush => ROYAL_RANKS.to_vec(),
            MadeHand::StraightFlush { high } | MadeHand::Straight { high } => vec![*high],
            MadeHand::FourOfAKind { quads: group, kickers }
            | MadeHand::ThreeOfAKind { trips: group, kickers }
            | MadeHand::Pair { pair: group, kickers } => {
                std::iter::once(*group).chain(kickers.iter().copied()).collect()
            }
            MadeHand::FullHouse { trips, pair } => vec![*trips, *pair],
            MadeHand::TwoPair { high, low, kickers } => {
                [*high, *low].into_iter().chain(kickers.iter().copied()).collect()
            }
            MadeHand::Flush { ranks } | MadeHand::HighCard { ranks } => ranks.clone(),
        }
    }

    /// Человеческое название: "Full House Queens and Nines", "Pair of Eights".
    pub fn display_name(&self) -> String {
        match self {
            MadeHand::RoyalFlush => "Royal Flush".to_string(),
            MadeHand::StraightFlush { high } => format!("{} High Straight Flush", high.name()),
            MadeHand::FourOfAKind { quads, .. } => format!("Four of a Kind {}", quads.plural()),
            MadeHand::FullHouse { trips, pair } => {
                format!("Full House {} and {}", trips.plural(), pair.plural())
            }
            MadeHand::Flush { ranks } => match ranks.first() {
                Some(high) => format!("{} High Flush", high.name()),
                None => "Flush".to_string(),
            },
            MadeHand::Straight { high } => format!("{} High Straight", high.name()),
            MadeHand::ThreeOfAKind { trips, .. } => {
                format!("Three of a Kind {}", trips.plural())
            }
            MadeHand::TwoPair { high, low, .. } => {
                format!("Two Pair {} and {}", high.plural(), low.plural())
            }
            MadeHand::Pair { pair, .. } => format!("Pair of {}", pair.plural()),
            MadeHand::HighCard { ranks } => match ranks.first() {
                Some(high) => format!("{} High", high.name()),
                None => "High Card".to_string(),
            },
        }
    }
}

/// Результат оценки руки одного игрока.
///
/// Строится один раз из `MadeHand` и дальше не меняется.
/// В JSON хранится только `MadeHand`, остальное выводится заново.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "MadeHand", into = "MadeHand")]
pub struct HandResult {
    hand: MadeHand,
    category: HandCategory,
    /// Числовые значения рангов (2..14), старшие первыми.
    tiebreak_cards: Vec<u8>,
    display_name: String,
}

impl From<MadeHand> for HandResult {
    fn from(hand: MadeHand) -> Self {
        let category = hand.category();
        let tiebreak_cards = hand.tiebreak_ranks().iter().map(|r| r.value()).collect();
        let display_name = hand.display_name();
        Self {
            hand,
            category,
            tiebreak_cards,
            display_name,
        }
    }
}

impl From<HandResult> for MadeHand {
    fn from(result: HandResult) -> Self {
        result.hand
    }
}

impl HandResult {
    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn tiebreak_cards(&self) -> &[u8] {
        &self.tiebreak_cards
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn made_hand(&self) -> &MadeHand {
        &self.hand
    }

    /// Полное сравнение силы: сначала категория, потом тай-брейк по позициям.
    /// `Greater` = `self` сильнее.
    pub fn compare_strength(&self, other: &HandResult) -> Ordering {
        self.category
            .cmp_strength(other.category)
            .then_with(|| self.tiebreak_cards.cmp(&other.tiebreak_cards))
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}
