use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Тип действия игрока. На проводе – строка в нижнем регистре
/// (`"fold"`, `"check"`, `"call"`, `"bet"`, `"raise"`, `"allin"`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    /// All-in – поставить весь стек.
    AllIn,
}

impl ActionKind {
    pub const ALL: [ActionKind; 6] = [
        ActionKind::Fold,
        ActionKind::Check,
        ActionKind::Call,
        ActionKind::Bet,
        ActionKind::Raise,
        ActionKind::AllIn,
    ];

    /// Требует ли действие явную сумму.
    pub fn requires_amount(self) -> bool {
        matches!(self, ActionKind::Bet | ActionKind::Raise)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "allin",
        }
    }

    /// Разбор строкового типа с провода. Неизвестный тип → `None`.
    pub fn parse(s: &str) -> Option<ActionKind> {
        ActionKind::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Конкретное действие игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    /// Место, от имени которого действие (0..5).
    pub seat: SeatIndex,
    /// Сумма – обязательна для Bet/Raise, для All-in необязательна.
    pub amount: Option<Chips>,
}

impl Action {
    pub fn new(kind: ActionKind, seat: SeatIndex, amount: Option<Chips>) -> Self {
        Self { kind, seat, amount }
    }

    pub fn fold(seat: SeatIndex) -> Self {
        Self::new(ActionKind::Fold, seat, None)
    }

    pub fn check(seat: SeatIndex) -> Self {
        Self::new(ActionKind::Check, seat, None)
    }

    pub fn call(seat: SeatIndex) -> Self {
        Self::new(ActionKind::Call, seat, None)
    }

    pub fn bet(seat: SeatIndex, amount: u64) -> Self {
        Self::new(ActionKind::Bet, seat, Some(Chips(amount)))
    }

    pub fn raise(seat: SeatIndex, amount: u64) -> Self {
        Self::new(ActionKind::Raise, seat, Some(Chips(amount)))
    }

    /// All-in без суммы (см. `ChipPolicy`).
    pub fn all_in(seat: SeatIndex) -> Self {
        Self::new(ActionKind::AllIn, seat, None)
    }

    /// All-in с явной суммой (обычно – весь стек места).
    pub fn all_in_for(seat: SeatIndex, amount: u64) -> Self {
        Self::new(ActionKind::AllIn, seat, Some(Chips(amount)))
    }

    /// Несёт ли действие ненулевую сумму.
    pub fn moves_chips(&self) -> bool {
        self.amount.is_some_and(|a| !a.is_zero())
    }

    /// Короткая запись для строки `action_sequence`: `f`, `x`, `c`, `b40`, `r80`, `allin`.
    pub fn sequence_code(&self) -> String {
        match (self.kind, self.amount) {
            (ActionKind::Fold, _) => "f".to_string(),
            (ActionKind::Check, _) => "x".to_string(),
            (ActionKind::Call, _) => "c".to_string(),
            (ActionKind::Bet, Some(a)) => format!("b{a}"),
            (ActionKind::Bet, None) => "b".to_string(),
            (ActionKind::Raise, Some(a)) => format!("r{a}"),
            (ActionKind::Raise, None) => "r".to_string(),
            (ActionKind::AllIn, _) => "allin".to_string(),
        }
    }
}
