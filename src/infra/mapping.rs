use crate::api::dto::{ActionRecord, HandSubmission};
use crate::api::errors::SubmissionError;
use crate::domain::chips::Chips;
use crate::domain::table::{parse_player_label, player_label};
use crate::engine::{Action, ActionKind, HandEngine, RandomSource};

/// Action движка → запись на проводе.
pub fn action_to_record(action: &Action) -> ActionRecord {
    ActionRecord {
        kind: action.kind.as_str().to_string(),
        player: player_label(action.seat),
        amount: action.amount.map(|a| a.0),
    }
}

/// Запись с провода → Action движка.
///
/// Неизвестный тип или метка игрока – ошибка; легальность самого действия
/// проверяет уже движок.
pub fn record_to_action(record: &ActionRecord) -> Result<Action, SubmissionError> {
    let kind = ActionKind::parse(&record.kind)
        .ok_or_else(|| SubmissionError::UnknownActionType(record.kind.clone()))?;
    let seat = parse_player_label(&record.player)
        .ok_or_else(|| SubmissionError::UnknownPlayer(record.player.clone()))?;
    Ok(Action::new(kind, seat, record.amount.map(Chips)))
}

/// Снимок раздачи для сохранения. Вызывать после того, как движок
/// полностью обновлён (действие применено, улица сменена).
///
/// Карты берутся из истории сдачи, поэтому у сфолдивших они тоже есть.
pub fn submission_from_engine<R: RandomSource>(engine: &HandEngine<R>) -> HandSubmission {
    let positions = engine.config().positions;
    HandSubmission {
        stacks: engine.players().iter().map(|p| p.stack.0).collect(),
        player_cards: engine.history().dealt_hole_cards(),
        actions: engine.action_log().iter().map(action_to_record).collect(),
        dealer_position: positions.dealer,
        small_blind_position: positions.small_blind,
        big_blind_position: positions.big_blind,
    }
}
