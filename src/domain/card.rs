use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты. Масти не упорядочены, используются только для флеша.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Индекс масти 0..4 (для счётчиков по мастям).
    pub const fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }
}

/// Ранг карты. Числовое значение 2..14, туз всегда старший.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// Все ранги по возрастанию. Индекс = значение - 2.
const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

const RANK_SYMBOLS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

const RANK_NAMES: [&str; 13] = [
    "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King", "Ace",
];

const RANK_PLURALS: [&str; 13] = [
    "Twos", "Threes", "Fours", "Fives", "Sixes", "Sevens", "Eights", "Nines", "Tens", "Jacks",
    "Queens", "Kings", "Aces",
];

impl Rank {
    pub const ALL: [Rank; 13] = RANKS;

    /// Числовое значение ранга: 2..14.
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Обратное отображение значения в ранг.
    pub const fn from_value(value: u8) -> Option<Rank> {
        if value < 2 || value > 14 {
            return None;
        }
        Some(RANKS[(value - 2) as usize])
    }

    const fn table_index(self) -> usize {
        (self as u8 - 2) as usize
    }

    /// Английское название в единственном числе: "Queen".
    pub const fn name(self) -> &'static str {
        RANK_NAMES[self.table_index()]
    }

    /// Английское название во множественном числе: "Queens".
    pub const fn plural(self) -> &'static str {
        RANK_PLURALS[self.table_index()]
    }

    pub const fn symbol(self) -> char {
        RANK_SYMBOLS[self.table_index()]
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Числовое значение ранга карты (2..14).
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Ошибки разбора текстовой записи карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Пустая запись карты")]
    Empty,

    #[error("Неизвестный ранг: {0}")]
    InvalidRank(String),

    #[error("Неизвестная масть: {0}")]
    InvalidSuit(char),
}

impl FromStr for Rank {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "t" | "10" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return Err(CardParseError::InvalidRank(s.to_string())),
        };
        Ok(rank)
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'c' | 'C' | '♣' => Ok(Suit::Clubs),
            'd' | 'D' | '♦' => Ok(Suit::Diamonds),
            'h' | 'H' | '♥' => Ok(Suit::Hearts),
            's' | 'S' | '♠' => Ok(Suit::Spades),
            _ => Err(CardParseError::InvalidSuit(ch)),
        }
    }
}

/// Парсинг строки вида "Ah", "Td", "10s", "7♣".
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_ch = s.chars().last().ok_or(CardParseError::Empty)?;
        let rank_part = &s[..s.len() - suit_ch.len_utf8()];
        if rank_part.is_empty() {
            return Err(CardParseError::InvalidRank(s.to_string()));
        }

        let rank = rank_part.parse::<Rank>()?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card { rank, suit })
    }
}

/// Разобрать список карт, разделённых пробелами или запятыми: "Ah Kd, 7c".
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardParseError> {
    s.split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
