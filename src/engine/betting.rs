use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerState;
use crate::domain::table::{SeatIndex, SEATS};

/// Состояние круга ставок на текущей улице.
///
/// Ведётся при любом `RoundClosure`; закрывает круг только в режиме
/// `MatchedCommitments`, а `ChipPolicy::Corrected` берёт из него долг для call.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Максимальный вклад места на этой улице – до него должны дотянуться остальные.
    pub current_bet: Chips,
    /// Сколько каждое место вложило на этой улице.
    pub committed: [Chips; SEATS],
    /// Сходило ли место после последней агрессии.
    pub acted: [bool; SEATS],
    /// Seat последнего агрессора (bet/raise/all-in выше текущей ставки).
    pub last_aggressor: Option<SeatIndex>,
}

impl BettingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сколько месту нужно доплатить, чтобы уравнять текущую ставку.
    pub fn owed(&self, seat: SeatIndex) -> Chips {
        self.current_bet.saturating_sub(self.committed[seat as usize])
    }

    /// Учесть вклад места. Если вклад перекрыл текущую ставку – это агрессия:
    /// остальные снова обязаны ответить. Возвращает `true` для агрессии.
    pub fn commit(&mut self, seat: SeatIndex, amount: Chips) -> bool {
        let idx = seat as usize;
        self.committed[idx] += amount;

        if self.committed[idx] > self.current_bet {
            self.current_bet = self.committed[idx];
            self.last_aggressor = Some(seat);
            self.acted = [false; SEATS];
            return true;
        }
        false
    }

    /// Отметить, что место сходило.
    pub fn mark_acted(&mut self, seat: SeatIndex) {
        self.acted[seat as usize] = true;
    }

    /// Нужно ли ещё месту действовать на этой улице.
    pub fn needs_action(&self, seat: SeatIndex, player: &PlayerState) -> bool {
        player.can_act() && (!self.acted[seat as usize] || !self.owed(seat).is_zero())
    }

    /// Круг закрыт: каждое место, которое ещё может ходить, сходило
    /// после последней агрессии и уравняло ставку. Fold и all-in не ждём.
    pub fn is_round_complete(&self, players: &[PlayerState]) -> bool {
        players
            .iter()
            .enumerate()
            .all(|(idx, p)| !self.needs_action(idx as SeatIndex, p))
    }
}
