use crate::domain::card::{Card, Rank};

/// Битовая маска рангов.
///
/// Используем 13 бит (от 2 до A):
/// бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Константы масок для всех стритов (5 подряд), от младшего к старшему.
///
/// Туз только старший: A2345 (wheel) стритом НЕ считается.
///
/// Индексы:
///   0: 6-2             : 23456
///   1: 7-3             : 34567
///   2: 8-4             : 45678
///   3: 9-5             : 56789
///   4: T-6             : 6789T
///   5: J-7             : 789TJ
///   6: Q-8             : 89TJQ
///   7: K-9             : 9TJQK
///   8: A-T (broadway)  : TJQKA
pub const STRAIGHT_MASKS: [RankMask; 9] = [
    mask_from_ranks(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]),
    mask_from_ranks(&[Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven]),
    mask_from_ranks(&[Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight]),
    mask_from_ranks(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]),
    mask_from_ranks(&[Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten]),
    mask_from_ranks(&[Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack]),
    mask_from_ranks(&[Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen]),
    mask_from_ranks(&[Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]),
    mask_from_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]),
];

/// Старшая карта стрита для каждой маски из `STRAIGHT_MASKS`.
const STRAIGHT_HIGH: [Rank; 9] = [
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

/// Получить битовую маску для одного ранга.
pub const fn rank_to_bit(rank: Rank) -> RankMask {
    let idx = (rank as u8).saturating_sub(2); // Rank::Two = 2
    1u16 << idx
}

/// Построить маску из списка рангов.
pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= rank_to_bit(ranks[i]);
        i += 1;
    }
    mask
}

/// Маска рангов набора карт (повторы схлопываются).
pub fn mask_from_cards(cards: &[Card]) -> RankMask {
    cards.iter().fold(0, |mask, card| mask | rank_to_bit(card.rank))
}

/// Найти стрит в битовой маске рангов.
/// Возвращает старшую карту самого старшего стрита, если он есть.
///
/// Проверяются все окна, а не только пять старших рангов.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    STRAIGHT_MASKS
        .iter()
        .zip(STRAIGHT_HIGH.iter())
        .rev()
        .find(|(sm, _)| rank_mask & **sm == **sm)
        .map(|(_, high)| *high)
}

/// Ранги из маски по убыванию.
pub fn ranks_from_mask(rank_mask: RankMask) -> Vec<Rank> {
    Rank::ALL
        .iter()
        .rev()
        .copied()
        .filter(|r| rank_mask & rank_to_bit(*r) != 0)
        .collect()
}
