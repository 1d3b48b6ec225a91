//! Внешнее представление результатов (DTO) для движка раздачи.

pub mod dto;

pub use dto::{HandResultDto, ShowdownPlayerDto, WinnerResultDto};
