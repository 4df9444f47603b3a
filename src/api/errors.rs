use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;
use crate::infra::persistence::StoreError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON, неизвестный тип действия, метка игрока).
    BadRequest(String),

    /// Действие нелегально – движок его проигнорировал.
    IllegalAction(String),

    /// Ошибка хранилища раздач.
    Storage(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::IllegalAction(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Почему запись раздачи не принята на сохранение.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("нужно ровно 6 игроков, стеков: {stacks}, наборов карт: {cards}")]
    WrongPlayerCount { stacks: usize, cards: usize },

    #[error("у игрока P{} должно быть ровно 2 карты, получено {count}", .seat + 1)]
    WrongHoleCardCount { seat: usize, count: usize },

    #[error("{role}: место {seat} вне стола (0..5)")]
    PositionOutOfRange { role: &'static str, seat: u8 },

    #[error("{role} должен сидеть сразу после предыдущей позиции (ожидалось место {expected})")]
    PositionOrder { role: &'static str, expected: u8 },

    #[error("неизвестный игрок в действии: {0:?}")]
    UnknownPlayer(String),

    #[error("неизвестный тип действия: {0:?}")]
    UnknownActionType(String),

    #[error("для {0} нужна сумма больше нуля")]
    MissingAmount(String),
}
