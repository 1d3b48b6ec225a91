//! Оценщик шоудауна для Texas Hold'em.
//!
//! По карманным картам игроков и общим картам борда находит лучшую
//! 5-карточную руку каждого игрока и определяет победителя (или сплит).
//!
//! Раздача, ставки и учёт фишек живут снаружи: сюда приходит готовый
//! набор карт, отсюда уходит `WinnerResult` с названиями рук.

pub mod api;
pub mod domain;
pub mod eval;

pub use domain::{Card, PlayerId, PlayerStatus, Rank, ShowdownPlayer, Suit};
pub use eval::{
    evaluate_hand, get_winner, EvalConfig, EvalError, HandCategory, HandEvaluator, HandResult,
    MalformedHand, WinnerResult,
};
