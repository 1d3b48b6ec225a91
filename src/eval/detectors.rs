//! Независимые детекторы комбинаций.
//!
//! Каждый детектор смотрит на весь набор карт игрока (карманные + борд)
//! и не зависит от порядка карт. Детектор отвечает только на вопрос
//! "есть ли комбинация и какие ранги её задают", выбор итоговой
//! категории делает `evaluator`.

use crate::domain::card::{Card, Rank, Suit};

use super::lookup_tables::{
    detect_straight, mask_from_cards, mask_from_ranks, ranks_from_mask, RankMask,
};

/// Карты флешевой масти.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlushCards {
    pub suit: Suit,
    /// Все ранги этой масти, по убыванию (может быть больше пяти).
    pub ranks: Vec<Rank>,
}

impl FlushCards {
    /// Старшая карта флеша.
    pub fn high(&self) -> Option<Rank> {
        self.ranks.first().copied()
    }

    /// Стрит внутри флешевой масти (для стрит-флеша и роял-флеша).
    pub fn straight_high(&self) -> Option<Rank> {
        detect_straight(mask_from_ranks(&self.ranks))
    }
}

/// Группы одинаковых рангов в порядке приоритета.
///
/// Содержит только ранги, задающие группу. Кикеры добирает ранжировщик.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankGroup {
    FourOfAKind(Rank),
    FullHouse { trips: Rank, pair: Rank },
    ThreeOfAKind(Rank),
    TwoPair { high: Rank, low: Rank },
    Pair(Rank),
    None,
}

/// Флеш: есть ли масть, в которой не меньше пяти карт.
///
/// Из семи карт такая масть может быть только одна
/// (`EvalConfig` не пускает больше семи).
pub fn detect_flush(cards: &[Card]) -> Option<FlushCards> {
    let mut suit_counts = [0u8; 4];
    for card in cards {
        suit_counts[card.suit.index()] += 1;
    }

    let suit = Suit::ALL
        .into_iter()
        .find(|s| suit_counts[s.index()] >= 5)?;

    let mut ranks: Vec<Rank> = cards
        .iter()
        .filter(|c| c.suit == suit)
        .map(|c| c.rank)
        .collect();
    ranks.sort_by(|a, b| b.cmp(a));

    log::trace!("flush detected: suit={suit} ranks={ranks:?}");
    Some(FlushCards { suit, ranks })
}

/// Стрит по всем картам (ранги схлопываются). Возвращает старшую карту
/// самого старшего стрита.
pub fn detect_straight_in(cards: &[Card]) -> Option<Rank> {
    detect_straight(mask_from_cards(cards))
}

/// Счётчики рангов: индекс = числовое значение ранга (2..14).
pub fn rank_counts(cards: &[Card]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.value() as usize] += 1;
    }
    counts
}

/// Пары / сеты / каре / фулл-хаус.
///
/// Для фулл-хауса берётся старший сет и старший из оставшихся рангов,
/// встречающихся хотя бы дважды (второй сет тоже годится как пара).
pub fn detect_rank_groups(cards: &[Card]) -> RankGroup {
    let counts = rank_counts(cards);

    let mut quads: Vec<Rank> = Vec::new();
    let mut trips: Vec<Rank> = Vec::new();
    let mut pairs: Vec<Rank> = Vec::new();

    for rank in Rank::ALL.iter().rev().copied() {
        match counts[rank.value() as usize] {
            4 => quads.push(rank),
            3 => trips.push(rank),
            2 => pairs.push(rank),
            _ => {}
        }
    }

    let group = if let Some(&quad) = quads.first() {
        RankGroup::FourOfAKind(quad)
    } else if let Some(&top_trips) = trips.first() {
        // Кандидаты на пару: младшие сеты и пары, берём старший.
        let pair = trips[1..].iter().chain(pairs.iter()).copied().max();
        match pair {
            Some(pair) => RankGroup::FullHouse { trips: top_trips, pair },
            None => RankGroup::ThreeOfAKind(top_trips),
        }
    } else if pairs.len() >= 2 {
        RankGroup::TwoPair {
            high: pairs[0],
            low: pairs[1],
        }
    } else if let Some(&pair) = pairs.first() {
        RankGroup::Pair(pair)
    } else {
        RankGroup::None
    };

    log::trace!("rank groups: {group:?}");
    group
}

/// Старшие карты: до пяти различных рангов по убыванию.
pub fn detect_high_cards(cards: &[Card]) -> Vec<Rank> {
    kickers(cards, &[], 5)
}

/// Добрать `n` старших различных рангов, исключив ранги `exclude`
/// (ранги, уже задействованные в комбинации).
pub fn kickers(cards: &[Card], exclude: &[Rank], n: usize) -> Vec<Rank> {
    let excluded: RankMask = mask_from_ranks(exclude);
    let available = mask_from_cards(cards) & !excluded;
    let mut ranks = ranks_from_mask(available);
    ranks.truncate(n);
    ranks
}
