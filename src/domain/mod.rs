//! Доменная модель шоудауна: карты, колода, игроки на вскрытии.

pub mod card;
pub mod deck;
pub mod player;

/// Идентификатор игрока (выдаётся внешним движком).
pub type PlayerId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use player::*;
