use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;

/// Статус игрока на момент шоудауна.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен в текущей раздаче.
    Active,
    /// Игрок в олл-ине: ставок больше не делает, но карты вскрывает.
    AllIn,
    /// Игрок сфолдил и в шоудауне не участвует.
    Folded,
}

/// Игрок, дошедший до вскрытия: id + карманные карты.
///
/// Раздачу и учёт фишек делает внешний движок, сюда приходит
/// уже готовый набор карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownPlayer {
    pub player_id: PlayerId,
    /// Карманные карты (2 для холдема).
    pub hole_cards: Vec<Card>,
    pub status: PlayerStatus,
}

impl ShowdownPlayer {
    pub fn new(player_id: PlayerId, hole_cards: impl Into<Vec<Card>>) -> Self {
        Self {
            player_id,
            hole_cards: hole_cards.into(),
            status: PlayerStatus::Active,
        }
    }

    /// Тот же игрок, но с другим статусом.
    pub fn with_status(mut self, status: PlayerStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }
}
