//! Текстовый лог стола в том виде, в каком его показывает панель.
//! Игроки нумеруются с единицы: место 0 – "Player 1".

use crate::domain::card::concat_codes;
use crate::domain::chips::Chips;
use crate::domain::table::SeatIndex;
use crate::engine::{Action, HandEngine, RandomSource};

fn player_name(seat: SeatIndex) -> String {
    format!("Player {}", seat as usize + 1)
}

/// Строки начала раздачи: сдача карт, кнопка и блайнды.
pub fn hand_start_lines<R: RandomSource>(engine: &HandEngine<R>) -> Vec<String> {
    let mut lines: Vec<String> = engine
        .history()
        .dealt_hole_cards()
        .iter()
        .enumerate()
        .map(|(seat, cards)| {
            format!("{} is dealt {}", player_name(seat as SeatIndex), concat_codes(cards))
        })
        .collect();

    let config = engine.config();
    let positions = config.positions;
    lines.push("---".to_string());
    lines.push(format!("{} is the dealer", player_name(positions.dealer)));
    lines.push(format!(
        "{} posts small blind - {} chips",
        player_name(positions.small_blind),
        config.stakes.small_blind
    ));
    lines.push(format!(
        "{} posts big blind - {} chips",
        player_name(positions.big_blind),
        config.stakes.big_blind
    ));
    lines
}

/// Строка одного действия: `"Player 3 bet to 40 chips"`, `"Player 5 fold"`.
pub fn action_line(action: &Action) -> String {
    match action.amount {
        Some(amount) => format!("{} {} to {} chips", player_name(action.seat), action.kind, amount),
        None => format!("{} {}", player_name(action.seat), action.kind),
    }
}

/// Строки конца раздачи.
pub fn hand_end_lines(hand_id: &str, pot: Chips) -> Vec<String> {
    vec![format!("Hand #{hand_id} ended"), format!("Final pot was {pot}")]
}
