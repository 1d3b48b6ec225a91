use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::eval::{HandCategory, HandResult, WinnerResult};

/// DTO оценки руки для внешнего движка / фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResultDto {
    pub category: HandCategory,
    /// Номер категории: 1 = роял-флеш, 10 = старшая карта.
    pub category_rank: u8,
    pub tiebreak_cards: Vec<u8>,
    pub display_name: String,
}

impl From<&HandResult> for HandResultDto {
    fn from(result: &HandResult) -> Self {
        Self {
            category: result.category(),
            category_rank: result.category().rank_number(),
            tiebreak_cards: result.tiebreak_cards().to_vec(),
            display_name: result.display_name().to_string(),
        }
    }
}

/// Результат одного игрока на шоудауне.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownPlayerDto {
    pub player_id: PlayerId,
    pub is_winner: bool,
    pub hand: HandResultDto,
}

/// DTO шоудауна: кто выиграл и чем. Банк по `winners` делит внешний движок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinnerResultDto {
    pub winners: Vec<PlayerId>,
    pub is_split: bool,
    /// Отсортировано по `player_id`.
    pub players: Vec<ShowdownPlayerDto>,
}

impl From<&WinnerResult> for WinnerResultDto {
    fn from(result: &WinnerResult) -> Self {
        let players = result
            .hands()
            .iter()
            .map(|(&player_id, hand)| ShowdownPlayerDto {
                player_id,
                is_winner: result.is_winner(player_id),
                hand: HandResultDto::from(hand),
            })
            .collect();

        Self {
            winners: result.winners().to_vec(),
            is_split: result.is_split(),
            players,
        }
    }
}
