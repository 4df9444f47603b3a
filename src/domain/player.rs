use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;

/// Статус места в текущей раздаче.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок в раздаче и может действовать.
    Active,
    /// Игрок сфолдил, карты сброшены.
    Folded,
    /// Стек ушёл в банк целиком – больше ставить нечем.
    AllIn,
}

/// Состояние одного места за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerState {
    /// Текущий стек.
    pub stack: Chips,
    /// Карманные карты: 2 карты, пока игрок в раздаче; пусто после fold.
    pub hole_cards: Vec<Card>,
    pub status: PlayerStatus,
}

impl PlayerState {
    pub fn new(stack: Chips) -> Self {
        Self {
            stack,
            hole_cards: Vec::new(),
            status: PlayerStatus::Active,
        }
    }

    /// Держит ли место карты (для правила «осталось ≤ 1 игрока»).
    pub fn is_holding_cards(&self) -> bool {
        !self.hole_cards.is_empty()
    }

    pub fn is_folded(&self) -> bool {
        self.status == PlayerStatus::Folded
    }

    /// Может ли место ещё принимать решения на улице.
    pub fn can_act(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// Списать фишки со стека (не больше, чем есть). Возвращает реально списанное.
    pub fn take_chips(&mut self, amount: Chips) -> Chips {
        let real = amount.min(self.stack);
        self.stack -= real;
        if self.stack.is_zero() && self.status == PlayerStatus::Active {
            self.status = PlayerStatus::AllIn;
        }
        real
    }

    /// Сбросить карты (fold). Стек не трогаем.
    pub fn fold(&mut self) {
        self.hole_cards.clear();
        self.status = PlayerStatus::Folded;
    }
}
