use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Индекс места за столом (0..SEATS-1).
pub type SeatIndex = u8;

/// Стол всегда 6-max.
pub const SEATS: usize = 6;

/// Стейки стола. Блайнды только озвучиваются в логе, в банк они не идут.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl TableStakes {
    pub fn new(sb: Chips, bb: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
        }
    }
}

/// Кнопка и блайнды. Кнопка не ходит по кругу – позиции задаются на раздачу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatPositions {
    pub dealer: SeatIndex,
    pub small_blind: SeatIndex,
    pub big_blind: SeatIndex,
}

impl Default for SeatPositions {
    fn default() -> Self {
        Self {
            dealer: 2,
            small_blind: 3,
            big_blind: 4,
        }
    }
}

/// Как Call и All-in без суммы двигают фишки (только для `RoundClosure::OrbitCount`).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChipPolicy {
    /// Как в исходном столе: Call фишек не двигает, All-in без суммы тоже.
    #[default]
    Faithful,
    /// Call доплачивает до текущей ставки, All-in без суммы ставит весь стек.
    Corrected,
}

/// Как определяется конец круга ставок.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundClosure {
    /// Ход вернулся на `first_to_act` и в логе больше 6 действий.
    #[default]
    OrbitCount,
    /// Все, кто может ходить, сходили после последней агрессии и уравняли ставку.
    MatchedCommitments,
}

/// Как сдаются карты.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DealingMode {
    /// Независимые равномерные карты с возвращением (дубли возможны).
    #[default]
    WithReplacement,
    /// Перемешанная 52-карточная колода, без повторов на всю раздачу.
    ShuffledDeck,
}

/// Конфиг стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Стек, который получает каждое место на `reset`.
    pub starting_stack: Chips,
    /// Минимальный bet/raise.
    pub min_bet: Chips,
    pub stakes: TableStakes,
    pub positions: SeatPositions,
    /// Место, которое ходит первым после `reset` (и на котором считается круг).
    pub first_to_act: SeatIndex,
    pub chip_policy: ChipPolicy,
    pub round_closure: RoundClosure,
    pub dealing: DealingMode,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: Chips(10_000),
            min_bet: Chips(40),
            stakes: TableStakes::new(Chips(20), Chips(40)),
            positions: SeatPositions::default(),
            first_to_act: 2,
            chip_policy: ChipPolicy::Faithful,
            round_closure: RoundClosure::OrbitCount,
            dealing: DealingMode::WithReplacement,
        }
    }
}

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("место {0} вне стола (0..6)")]
    SeatOutOfRange(SeatIndex),

    #[error("дилер, SB и BB должны сидеть на разных местах")]
    PositionsOverlap,

    #[error("минимальная ставка должна быть больше нуля")]
    ZeroMinBet,

    #[error("стартовый стек должен быть больше нуля")]
    ZeroStartingStack,

    #[error("не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),
}

impl TableConfig {
    /// Разобрать конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Политика фишек, по которой реально двигаются Call и All-in без суммы.
    ///
    /// Круг по вкладам закрывается только уравненной ставкой, поэтому в этом
    /// режиме Call всегда доплачивает долг, а All-in ставит весь стек.
    pub fn effective_chip_policy(&self) -> ChipPolicy {
        match self.round_closure {
            RoundClosure::MatchedCommitments => ChipPolicy::Corrected,
            RoundClosure::OrbitCount => self.chip_policy,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.positions;
        for seat in [p.dealer, p.small_blind, p.big_blind, self.first_to_act] {
            if seat as usize >= SEATS {
                return Err(ConfigError::SeatOutOfRange(seat));
            }
        }
        if p.dealer == p.small_blind || p.small_blind == p.big_blind || p.dealer == p.big_blind {
            return Err(ConfigError::PositionsOverlap);
        }
        if self.min_bet.is_zero() {
            return Err(ConfigError::ZeroMinBet);
        }
        if self.starting_stack.is_zero() {
            return Err(ConfigError::ZeroStartingStack);
        }
        Ok(())
    }
}

/// Метка игрока на проводе: место 0 → `"P1"`.
pub fn player_label(seat: SeatIndex) -> String {
    format!("P{}", seat as usize + 1)
}

/// Обратный разбор метки `"P1".."P6"`.
pub fn parse_player_label(label: &str) -> Option<SeatIndex> {
    let n: usize = label.strip_prefix('P')?.parse().ok()?;
    if (1..=SEATS).contains(&n) {
        Some((n - 1) as SeatIndex)
    } else {
        None
    }
}
