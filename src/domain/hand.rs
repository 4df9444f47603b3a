use core::fmt;

use serde::{Deserialize, Serialize};

/// Фаза (улица) раздачи. Движется строго вперёд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoundPhase {
    Preflop,
    Flop,
    Turn,
    River,
    Complete,
}

impl RoundPhase {
    /// Следующая фаза; у `Complete` следующей нет.
    pub fn next(self) -> Option<RoundPhase> {
        match self {
            RoundPhase::Preflop => Some(RoundPhase::Flop),
            RoundPhase::Flop => Some(RoundPhase::Turn),
            RoundPhase::Turn => Some(RoundPhase::River),
            RoundPhase::River => Some(RoundPhase::Complete),
            RoundPhase::Complete => None,
        }
    }

    /// Сколько карт докладывается на борд при входе в эту фазу.
    pub fn cards_on_entry(self) -> usize {
        match self {
            RoundPhase::Flop => 3,
            RoundPhase::Turn | RoundPhase::River => 1,
            RoundPhase::Preflop | RoundPhase::Complete => 0,
        }
    }

    /// Сколько карт должно лежать на борде в этой фазе.
    pub fn board_len(self) -> usize {
        match self {
            RoundPhase::Preflop => 0,
            RoundPhase::Flop => 3,
            RoundPhase::Turn => 4,
            RoundPhase::River | RoundPhase::Complete => 5,
        }
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundPhase::Preflop => "preflop",
            RoundPhase::Flop => "flop",
            RoundPhase::Turn => "turn",
            RoundPhase::River => "river",
            RoundPhase::Complete => "complete",
        };
        f.write_str(name)
    }
}
