use std::collections::HashSet;

use crate::domain::card::{Card, Rank};

use super::config::{EvalConfig, MIN_CARDS};
use super::detectors::{
    detect_flush, detect_high_cards, detect_rank_groups, detect_straight_in, kickers, FlushCards,
    RankGroup,
};
use super::errors::{ConfigError, EvalError, MalformedHand};
use super::hand_rank::{HandResult, MadeHand};

/// Оценщик рук. Состояния нет, только правила проверки входа.
#[derive(Clone, Debug, Default)]
pub struct HandEvaluator {
    config: EvalConfig,
}

impl HandEvaluator {
    /// Оценщик с правилами холдема по умолчанию.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Лучшая 5-карточная рука из карманных карт + борда.
    ///
    /// Ошибка, если карт меньше 5 или больше `max_cards`, если число
    /// карманных карт не совпадает с конфигом или если карта повторяется.
    pub fn evaluate_hand(&self, community: &[Card], hole: &[Card]) -> Result<HandResult, EvalError> {
        self.check_hole_cards(hole)?;

        let mut all_cards = Vec::with_capacity(hole.len() + community.len());
        all_cards.extend_from_slice(hole);
        all_cards.extend_from_slice(community);

        self.check_card_set(&all_cards)?;

        let result = HandResult::from(rank_cards(&all_cards));
        log::debug!(
            "evaluated {} cards: {} {:?}",
            all_cards.len(),
            result.display_name(),
            result.tiebreak_cards()
        );
        Ok(result)
    }

    fn check_hole_cards(&self, hole: &[Card]) -> Result<(), EvalError> {
        match self.config.hole_cards {
            Some(expected) if hole.len() != expected => {
                log::warn!("rejected hand: {} hole cards, expected {expected}", hole.len());
                Err(MalformedHand::WrongHoleCardCount {
                    expected,
                    got: hole.len(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }

    fn check_card_set(&self, cards: &[Card]) -> Result<(), EvalError> {
        let malformed = if cards.len() < MIN_CARDS {
            Some(MalformedHand::TooFewCards { got: cards.len() })
        } else if cards.len() > self.config.max_cards {
            Some(MalformedHand::TooManyCards {
                got: cards.len(),
                max: self.config.max_cards,
            })
        } else {
            find_duplicate(cards).map(MalformedHand::DuplicateCard)
        };

        match malformed {
            Some(reason) => {
                log::warn!("rejected hand: {reason}");
                Err(reason.into())
            }
            None => Ok(()),
        }
    }
}

/// Оценка руки с правилами по умолчанию (холдем).
pub fn evaluate_hand(community: &[Card], hole: &[Card]) -> Result<HandResult, EvalError> {
    HandEvaluator::default().evaluate_hand(community, hole)
}

/// Первая карта, встретившаяся повторно.
pub(crate) fn find_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|card| !seen.insert(*card))
}

/// Выбор категории по выходам детекторов. Первая подходящая категория
/// сверху побеждает, более слабая никогда не вытесняет более сильную.
///
/// Вход уже проверен: 5..=max_cards различных карт.
fn rank_cards(cards: &[Card]) -> MadeHand {
    let flush = detect_flush(cards);
    let straight_flush = flush.as_ref().and_then(FlushCards::straight_high);

    if let Some(high) = straight_flush {
        return if high == Rank::Ace {
            MadeHand::RoyalFlush
        } else {
            MadeHand::StraightFlush { high }
        };
    }

    let groups = detect_rank_groups(cards);
    let straight = detect_straight_in(cards);

    match (groups, flush, straight) {
        (RankGroup::FourOfAKind(quads), _, _) => MadeHand::FourOfAKind {
            quads,
            kickers: kickers(cards, &[quads], 1),
        },
        (RankGroup::FullHouse { trips, pair }, _, _) => MadeHand::FullHouse { trips, pair },
        (_, Some(flush), _) => MadeHand::Flush {
            ranks: flush.ranks.into_iter().take(5).collect(),
        },
        (_, None, Some(high)) => MadeHand::Straight { high },
        (RankGroup::ThreeOfAKind(trips), None, None) => MadeHand::ThreeOfAKind {
            trips,
            kickers: kickers(cards, &[trips], 2),
        },
        (RankGroup::TwoPair { high, low }, None, None) => MadeHand::TwoPair {
            high,
            low,
            kickers: kickers(cards, &[high, low], 1),
        },
        (RankGroup::Pair(pair), None, None) => MadeHand::Pair {
            pair,
            kickers: kickers(cards, &[pair], 3),
        },
        (RankGroup::None, None, None) => MadeHand::HighCard {
            ranks: detect_high_cards(cards),
        },
    }
}
