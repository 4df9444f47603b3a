use crate::domain::{Chips, RoundPhase, SeatIndex};

use thiserror::Error;

/// Почему действие нелегально.
///
/// Движок не «бросает» эти ошибки: `validate_action` превращает их в `false`,
/// а `apply_action` возвращает `ActionOutcome::Rejected` и ничего не меняет.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("В этом месте нет игрока")]
    EmptySeat,

    #[error("Сейчас ход места {expected}, а не {got}")]
    NotPlayersTurn { expected: SeatIndex, got: SeatIndex },

    #[error("Раздача уже завершена ({0})")]
    HandComplete(RoundPhase),

    #[error("Место {0} не может действовать (fold или all-in)")]
    SeatCannotAct(SeatIndex),

    #[error("Для bet/raise нужна сумма")]
    MissingAmount,

    #[error("Ставка {amount} меньше минимальной {min}")]
    BetTooSmall { amount: Chips, min: Chips },

    #[error("Ставка {amount} не перекрывает долг {owed}")]
    RaiseTooSmall { amount: Chips, owed: Chips },

    #[error("Недостаточно фишек: нужно {amount}, в стеке {stack}")]
    NotEnoughChips { amount: Chips, stack: Chips },

    #[error("Стек пуст – all-in невозможен")]
    EmptyStack,

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    NothingToCall,

    #[error("Невозможно выполнить check – нужно хотя бы уравнять ставку")]
    CannotCheck,
}
