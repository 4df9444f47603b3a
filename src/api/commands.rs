use serde::{Deserialize, Serialize};

use crate::api::dto::{ActionRecord, HandSubmission, HandViewDto};
use crate::api::errors::ApiError;
use crate::api::queries::build_hand_view;
use crate::domain::chips::Chips;
use crate::engine::{ActionOutcome, HandEngine, RandomSource};
use crate::infra::mapping::{record_to_action, submission_from_engine};

/// Команда панели управления раздачей.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать новую раздачу.
    Reset,

    /// Действие игрока в формате записи раздачи.
    Act(ActionRecord),

    /// Принудительно перейти на следующую улицу.
    NextRound,
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Раздача продолжается.
    HandState(HandViewDto),

    /// Раздача окончена – вместе с видом отдаём готовую запись для сохранения.
    HandFinished {
        view: HandViewDto,
        submission: HandSubmission,
    },
}

impl CommandResponse {
    pub fn view(&self) -> &HandViewDto {
        match self {
            CommandResponse::HandState(view) => view,
            CommandResponse::HandFinished { view, .. } => view,
        }
    }
}

/// Выполнить команду на движке.
///
/// Нелегальное действие возвращается ошибкой `IllegalAction`,
/// состояние движка при этом не меняется.
pub fn execute<R: RandomSource>(
    engine: &mut HandEngine<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::Reset => engine.reset(),

        Command::Act(record) => {
            let action = record_to_action(&record).map_err(|e| ApiError::BadRequest(e.to_string()))?;
            if let ActionOutcome::Rejected(err) = engine.apply_action(action) {
                return Err(err.into());
            }
        }

        Command::NextRound => {
            engine.next_round();
        }
    }

    let bet_amount = engine.config().min_bet;
    Ok(respond(engine, bet_amount))
}

fn respond<R: RandomSource>(engine: &HandEngine<R>, bet_amount: Chips) -> CommandResponse {
    // Карты открыты только у места на ходу; после раздачи – у всех.
    let hand_over = engine.is_hand_over();
    let current = engine.current_seat();
    let view = build_hand_view(engine, bet_amount, |seat| hand_over || seat == current);

    if hand_over {
        CommandResponse::HandFinished {
            view,
            submission: submission_from_engine(engine),
        }
    } else {
        CommandResponse::HandState(view)
    }
}
