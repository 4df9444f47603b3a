use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::SubmissionError;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::RoundPhase;
use crate::domain::player::PlayerStatus;
use crate::domain::table::{parse_player_label, SeatIndex, SEATS};
use crate::engine::ActionKind;

/// Действие в записи раздачи: `{type, player, amount?}`, `player` = `"P1".."P6"`.
///
/// `type` держим строкой: неизвестный тип – не ошибка разбора JSON,
/// а нелегальное действие, которое отсеивает маппинг.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

/// Запись завершённой раздачи для сохранения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSubmission {
    /// Стек по каждому месту, в порядке мест.
    pub stacks: Vec<u64>,
    /// Карманные карты по каждому месту, как их сдали.
    pub player_cards: Vec<Vec<Card>>,
    pub actions: Vec<ActionRecord>,
    pub dealer_position: SeatIndex,
    pub small_blind_position: SeatIndex,
    pub big_blind_position: SeatIndex,
}

impl HandSubmission {
    /// Проверка формы записи перед сохранением.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.stacks.len() != SEATS || self.player_cards.len() != SEATS {
            return Err(SubmissionError::WrongPlayerCount {
                stacks: self.stacks.len(),
                cards: self.player_cards.len(),
            });
        }
        if let Some((seat, cards)) = self
            .player_cards
            .iter()
            .enumerate()
            .find(|(_, cards)| cards.len() != 2)
        {
            return Err(SubmissionError::WrongHoleCardCount {
                seat,
                count: cards.len(),
            });
        }

        for (role, seat) in [
            ("dealer", self.dealer_position),
            ("small blind", self.small_blind_position),
            ("big blind", self.big_blind_position),
        ] {
            if seat as usize >= SEATS {
                return Err(SubmissionError::PositionOutOfRange { role, seat });
            }
        }

        let after = |seat: SeatIndex| ((seat as usize + 1) % SEATS) as SeatIndex;
        if self.small_blind_position != after(self.dealer_position) {
            return Err(SubmissionError::PositionOrder {
                role: "small blind",
                expected: after(self.dealer_position),
            });
        }
        if self.big_blind_position != after(self.small_blind_position) {
            return Err(SubmissionError::PositionOrder {
                role: "big blind",
                expected: after(self.small_blind_position),
            });
        }

        for record in &self.actions {
            if parse_player_label(&record.player).is_none() {
                return Err(SubmissionError::UnknownPlayer(record.player.clone()));
            }
            let kind = ActionKind::parse(&record.kind)
                .ok_or_else(|| SubmissionError::UnknownActionType(record.kind.clone()))?;
            if kind.requires_amount() && record.amount.unwrap_or(0) == 0 {
                return Err(SubmissionError::MissingAmount(record.kind.clone()));
            }
        }

        Ok(())
    }
}

/// Сохранённая раздача (путь чтения истории).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRecord {
    pub id: Uuid,
    pub stacks: Vec<u64>,
    pub player_cards: Vec<Vec<Card>>,
    pub action_sequence: Vec<ActionRecord>,
    /// Метка игрока → изменение стека за раздачу (со знаком).
    pub winnings: BTreeMap<String, i64>,
    pub dealer_position: SeatIndex,
    pub small_blind_position: SeatIndex,
    pub big_blind_position: SeatIndex,
    pub created_at: DateTime<Utc>,
}

/// DTO одного места за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatDto {
    pub seat: SeatIndex,
    pub label: String,
    pub stack: Chips,
    pub status: PlayerStatus,
    /// Карманные карты – только если их разрешено показывать.
    pub hole_cards: Option<Vec<Card>>,
    pub is_dealer: bool,
    pub is_current: bool,
}

/// Какие кнопки панели сейчас активны.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalActionsDto {
    pub fold: bool,
    pub check: bool,
    pub call: bool,
    pub bet: bool,
    pub raise: bool,
    pub all_in: bool,
}

/// DTO раздачи для отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandViewDto {
    pub hand_number: u64,
    pub phase: RoundPhase,
    pub pot: Chips,
    pub board: Vec<Card>,
    pub current_seat: SeatIndex,
    pub seats: Vec<SeatDto>,
    pub legal_actions: LegalActionsDto,
    /// Сумма, под которую посчитаны `legal_actions.bet/raise`.
    pub bet_amount: Chips,
    pub hand_over: bool,
}
