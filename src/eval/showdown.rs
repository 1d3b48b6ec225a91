//! Определение победителя среди игроков, дошедших до вскрытия.
//!
//! Порядок: оценить каждого активного игрока, взять лучшую категорию,
//! среди игроков с ней сравнить тай-брейк по позициям. Если после всех
//! позиций осталось несколько игроков — это сплит.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::player::ShowdownPlayer;
use crate::domain::PlayerId;

use super::errors::{EvalError, MalformedHand};
use super::evaluator::{find_duplicate, HandEvaluator};
use super::hand_rank::HandResult;

/// Итог шоудауна.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerResult {
    /// Победители (один или несколько при сплите) в порядке входного списка.
    winners: Vec<PlayerId>,
    /// Оценка руки каждого активного игрока.
    hands: BTreeMap<PlayerId, HandResult>,
}

impl WinnerResult {
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    pub fn hands(&self) -> &BTreeMap<PlayerId, HandResult> {
        &self.hands
    }

    pub fn hand(&self, player_id: PlayerId) -> Option<&HandResult> {
        self.hands.get(&player_id)
    }

    pub fn is_winner(&self, player_id: PlayerId) -> bool {
        self.winners.contains(&player_id)
    }

    /// Банк делится между несколькими игроками.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    /// Рука победителя (при сплите руки равны по тай-брейку).
    pub fn winning_hand(&self) -> Option<&HandResult> {
        self.winners.first().and_then(|id| self.hands.get(id))
    }
}

impl HandEvaluator {
    /// Определить победителя (или победителей) среди не сфолдивших игроков.
    pub fn get_winner(
        &self,
        players: &[ShowdownPlayer],
        community: &[Card],
    ) -> Result<WinnerResult, EvalError> {
        let active: Vec<&ShowdownPlayer> = players.iter().filter(|p| p.is_in_hand()).collect();
        if active.is_empty() {
            log::warn!("showdown requested with no active players");
            return Err(EvalError::EmptyPlayerSet);
        }

        let mut seen_ids = HashSet::with_capacity(active.len());
        if let Some(dup) = active.iter().find(|p| !seen_ids.insert(p.player_id)) {
            return Err(EvalError::DuplicatePlayer(dup.player_id));
        }

        // Одна и та же карта не может быть и на борде, и у двух игроков сразу.
        let mut dealt: Vec<Card> = community.to_vec();
        for p in &active {
            dealt.extend_from_slice(&p.hole_cards);
        }
        if let Some(card) = find_duplicate(&dealt) {
            log::warn!("rejected showdown: card {card} dealt twice");
            return Err(MalformedHand::DuplicateCard(card).into());
        }

        let evaluated = active
            .iter()
            .map(|p| {
                self.evaluate_hand(community, &p.hole_cards)
                    .map(|hand| (p.player_id, hand))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let winners = resolve_winners(&evaluated);
        log::debug!("showdown winners: {winners:?}");

        Ok(WinnerResult {
            winners,
            hands: evaluated.into_iter().collect(),
        })
    }
}

/// Шоудаун с правилами по умолчанию (холдем).
pub fn get_winner(
    players: &[ShowdownPlayer],
    community: &[Card],
) -> Result<WinnerResult, EvalError> {
    HandEvaluator::default().get_winner(players, community)
}

/// Выбрать победителей среди уже оценённых рук.
///
/// Пустой вход даёт пустой список.
pub fn resolve_winners(hands: &[(PlayerId, HandResult)]) -> Vec<PlayerId> {
    let Some(best) = hands.iter().map(|(_, h)| h.category().rank_number()).min() else {
        return Vec::new();
    };

    let candidates: Vec<(PlayerId, &[u8])> = hands
        .iter()
        .filter(|(_, h)| h.category().rank_number() == best)
        .map(|(id, h)| (*id, h.tiebreak_cards()))
        .collect();

    if candidates.len() == 1 {
        return vec![candidates[0].0];
    }
    tiebreak(candidates)
}

/// Позиционный тай-брейк: на каждой позиции остаются только игроки
/// с максимальным значением.
fn tiebreak(mut candidates: Vec<(PlayerId, &[u8])>) -> Vec<PlayerId> {
    let positions = candidates.iter().map(|(_, c)| c.len()).max().unwrap_or(0);

    for i in 0..positions {
        let Some(top) = candidates.iter().filter_map(|(_, c)| c.get(i).copied()).max() else {
            break;
        };
        candidates.retain(|(_, c)| c.get(i).copied() == Some(top));
        log::debug!("tiebreak position {i}: top={top}, {} left", candidates.len());

        if candidates.len() == 1 {
            break;
        }
    }

    candidates.into_iter().map(|(id, _)| id).collect()
}
