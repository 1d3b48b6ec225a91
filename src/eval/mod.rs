//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate_hand(community, hole) -> HandResult`
//!   `get_winner(players, community) -> WinnerResult`

pub mod config;
pub mod detectors;
pub mod errors;
pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;
pub mod showdown;

pub use config::{EvalConfig, EvalProfile};
pub use errors::{ConfigError, EvalError, MalformedHand};
pub use evaluator::{evaluate_hand, HandEvaluator};
pub use hand_rank::{HandCategory, HandResult, MadeHand};
pub use showdown::{get_winner, resolve_winners, WinnerResult};
