use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::PlayerId;

/// Почему набор карт нельзя оценить.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MalformedHand {
    #[error("Нужно минимум 5 карт, передано {got}")]
    TooFewCards { got: usize },

    #[error("Слишком много карт: {got}, максимум {max}")]
    TooManyCards { got: usize, max: usize },

    #[error("Ожидалось {expected} карманных карт, передано {got}")]
    WrongHoleCardCount { expected: usize, got: usize },

    #[error("Карта {0} встречается дважды")]
    DuplicateCard(Card),
}

/// Ошибки оценщика. Любая из них — нарушение контракта вызывающей стороной.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Некорректная рука: {0}")]
    MalformedHand(#[from] MalformedHand),

    #[error("Нет ни одного активного игрока для шоудауна")]
    EmptyPlayerSet,

    #[error("Игрок {0} передан дважды")]
    DuplicatePlayer(PlayerId),
}

/// Ошибки конфигурации оценщика.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_cards должен быть не меньше 5, получено {0}")]
    MaxCardsTooSmall(usize),

    #[error("max_cards должен быть не больше 7, получено {0}")]
    MaxCardsTooLarge(usize),

    #[error("hole_cards ({hole}) больше max_cards ({max})")]
    HoleCardsExceedMax { hole: usize, max: usize },

    #[error("Не удалось разобрать конфигурацию: {0}")]
    Json(#[from] serde_json::Error),
}
