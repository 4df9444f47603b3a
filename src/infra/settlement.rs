//! Расчёт выигрышей для истории, когда победитель известен заранее
//! (например, все, кроме одного, сбросили карты). Силу рук движок не считает.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::table::{player_label, SeatIndex, SEATS};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SettlementError {
    #[error("нужно ровно 6 вкладов, получено {0}")]
    WrongSeatCount(usize),

    #[error("победитель {0} вне стола")]
    WinnerOutOfRange(SeatIndex),
}

/// Один победитель забирает весь банк.
///
/// Каждый теряет свой вклад, победитель получает банк минус свой вклад.
/// Сумма по всем игрокам всегда ноль.
pub fn fallback_winnings(
    contributions: &[Chips],
    winner: SeatIndex,
) -> Result<BTreeMap<String, i64>, SettlementError> {
    if contributions.len() != SEATS {
        return Err(SettlementError::WrongSeatCount(contributions.len()));
    }
    if winner as usize >= SEATS {
        return Err(SettlementError::WinnerOutOfRange(winner));
    }

    let total: i64 = contributions.iter().map(|c| c.0 as i64).sum();

    let winnings = contributions
        .iter()
        .enumerate()
        .map(|(seat, c)| {
            let own = c.0 as i64;
            let net = if seat == winner as usize { total - own } else { -own };
            (player_label(seat as SeatIndex), net)
        })
        .collect();

    Ok(winnings)
}
