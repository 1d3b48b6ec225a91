use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт. В домене — просто упорядоченный список карт.
/// Перемешивание и раздачу делает внешний движок, НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
            .collect();
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды. `None`, если колода пуста.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Взять ровно n карт сверху. `None` (колода не тронута), если карт меньше n.
    pub fn draw_n(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }
        let split_at = self.cards.len() - n;
        let mut taken = self.cards.split_off(split_at);
        taken.reverse();
        Some(taken)
    }

    /// Убрать из колоды уже известные карты (например, борд из теста).
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}
