use crate::domain::hand::RoundPhase;
use crate::domain::player::PlayerState;
use crate::domain::table::{RoundClosure, SeatIndex, TableConfig};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Всё, что нужно для проверки действия. Только чтение.
pub struct ActionContext<'a> {
    pub config: &'a TableConfig,
    pub phase: RoundPhase,
    pub current_seat: SeatIndex,
    /// Игрок на месте, которое сейчас ходит (`None` – места нет).
    pub player: Option<&'a PlayerState>,
    pub action_log: &'a [Action],
    pub betting: &'a BettingState,
}

/// Проверка, может ли место на ходу выполнить это действие.
///
/// Чистая функция: одинаковый вход – одинаковый ответ, состояние не трогается.
pub fn validate_action(ctx: &ActionContext<'_>, action: &Action) -> Result<(), EngineError> {
    if ctx.phase == RoundPhase::Complete {
        return Err(EngineError::HandComplete(ctx.phase));
    }
    if action.seat != ctx.current_seat {
        return Err(EngineError::NotPlayersTurn {
            expected: ctx.current_seat,
            got: action.seat,
        });
    }

    let player = ctx.player.ok_or(EngineError::EmptySeat)?;
    let strict = ctx.config.round_closure == RoundClosure::MatchedCommitments;
    let owed = ctx.betting.owed(action.seat);

    // В строгом режиме fold/all-in места пропускаются, ходить им нечем.
    if strict && !player.can_act() {
        return Err(EngineError::SeatCannotAct(action.seat));
    }

    match action.kind {
        ActionKind::Fold => Ok(()),

        ActionKind::Check => {
            if strict && !owed.is_zero() {
                Err(EngineError::CannotCheck)
            } else {
                Ok(())
            }
        }

        ActionKind::Call => {
            let callable = if strict {
                !owed.is_zero()
            } else {
                // Кто-то уже вложил фишки в этой раздаче.
                ctx.action_log.iter().any(Action::moves_chips)
            };
            if callable {
                Ok(())
            } else {
                Err(EngineError::NothingToCall)
            }
        }

        ActionKind::Bet | ActionKind::Raise => {
            let amount = action.amount.ok_or(EngineError::MissingAmount)?;
            if amount < ctx.config.min_bet {
                return Err(EngineError::BetTooSmall {
                    amount,
                    min: ctx.config.min_bet,
                });
            }
            if amount > player.stack {
                return Err(EngineError::NotEnoughChips {
                    amount,
                    stack: player.stack,
                });
            }
            if strict && amount <= owed {
                return Err(EngineError::RaiseTooSmall { amount, owed });
            }
            Ok(())
        }

        ActionKind::AllIn => {
            if player.stack.is_zero() {
                return Err(EngineError::EmptyStack);
            }
            match action.amount {
                Some(amount) if amount > player.stack => Err(EngineError::NotEnoughChips {
                    amount,
                    stack: player.stack,
                }),
                _ => Ok(()),
            }
        }
    }
}
