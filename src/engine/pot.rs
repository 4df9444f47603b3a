use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::table::{SeatIndex, SEATS};

/// Банк раздачи и вклад каждого места в него. Сайд-потов нет.
///
/// Инвариант: `total` всегда равен сумме `contributions`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
    contributions: [Chips; SEATS],
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Положить фишки места в банк.
    pub fn add(&mut self, seat: SeatIndex, amount: Chips) {
        if let Some(slot) = self.contributions.get_mut(seat as usize) {
            *slot += amount;
            self.total += amount;
        }
    }

    pub fn contribution(&self, seat: SeatIndex) -> Chips {
        self.contributions
            .get(seat as usize)
            .copied()
            .unwrap_or(Chips::ZERO)
    }

    /// Вклады всех мест за раздачу, в порядке мест.
    pub fn contributions(&self) -> &[Chips; SEATS] {
        &self.contributions
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
