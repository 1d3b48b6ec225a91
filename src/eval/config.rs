//! Конфигурация оценщика.
//!
//! Только "правила" входных данных, без состояния.

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Минимум карт, из которых собирается 5-карточная рука.
pub const MIN_CARDS: usize = 5;

/// Максимум карт в одной оценке: 2 карманные + 5 общих.
pub const MAX_CARDS: usize = 7;

/// Профиль правил (на будущее можно добавить другие варианты раздачи).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EvalProfile {
    /// Холдем: 2 карманные + до 5 общих.
    Holdem,
    /// Без проверки числа карманных карт (тесты, короткий борд).
    Relaxed,
}

/// Правила проверки входа для `HandEvaluator`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EvalConfig {
    /// Максимум карт (карманные + борд) в одной оценке.
    pub max_cards: usize,
    /// Сколько карманных карт обязан иметь игрок; `None` — не проверять.
    pub hole_cards: Option<usize>,
}

impl EvalConfig {
    /// Строгий конструктор.
    pub const fn new(max_cards: usize, hole_cards: Option<usize>) -> Self {
        Self {
            max_cards,
            hole_cards,
        }
    }

    /// Холдем: до 7 карт, ровно 2 карманные.
    pub const fn holdem() -> Self {
        Self::new(MAX_CARDS, Some(2))
    }

    pub const fn relaxed() -> Self {
        Self::new(MAX_CARDS, None)
    }

    pub const fn from_profile(profile: EvalProfile) -> Self {
        match profile {
            EvalProfile::Holdem => Self::holdem(),
            EvalProfile::Relaxed => Self::relaxed(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cards < MIN_CARDS {
            return Err(ConfigError::MaxCardsTooSmall(self.max_cards));
        }
        if self.max_cards > MAX_CARDS {
            return Err(ConfigError::MaxCardsTooLarge(self.max_cards));
        }
        if let Some(hole) = self.hole_cards {
            if hole > self.max_cards {
                return Err(ConfigError::HoleCardsExceedMax {
                    hole,
                    max: self.max_cards,
                });
            }
        }
        Ok(())
    }

    /// Прочитать конфиг из JSON и сразу проверить. Отсутствующие поля
    /// берутся из `EvalConfig::default()`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EvalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::holdem()
    }
}
