//! Движок одной раздачи: легальность действий, банк, очередь хода, улицы.
//!
//! Высокоуровневый объект: `HandEngine`
//! Основные операции:
//!   - `reset` – новая раздача (стеки, карты, Preflop)
//!   - `validate_action` / `check_action` – чистая проверка действия
//!   - `apply_action` – применить действие и, если круг закрыт, сменить улицу
//!   - `next_round` – переход Preflop → Flop → Turn → River → Complete
//!   - `deal_board` – выдать карты для борда

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod validation;

pub use actions::{Action, ActionKind};
pub use errors::EngineError;
pub use game_loop::{ActionOutcome, HandEngine};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;

/// RNG интерфейс для engine. Реализации – в infra.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерный индекс в `0..bound`. `bound` > 0.
    fn gen_index(&mut self, bound: usize) -> usize;
}
