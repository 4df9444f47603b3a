use serde::{Deserialize, Serialize};

use crate::domain::card::{concat_codes, Card};
use crate::domain::chips::Chips;
use crate::domain::hand::RoundPhase;
use crate::domain::table::{SeatIndex, SEATS};
use crate::engine::actions::Action;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась (`hand_number` – порядковый номер reset'а).
    HandStarted { hand_number: u64 },

    /// Место получило карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Кнопка и блайнды – только для лога, фишки не двигаются.
    BlindsNarrated {
        dealer: SeatIndex,
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Принятое действие игрока (в том виде, в каком оно попало в лог).
    PlayerActed {
        action: Action,
        stack_after: Chips,
        pot_after: Chips,
    },

    /// Открыты общие карты.
    BoardDealt { phase: RoundPhase, cards: Vec<Card> },

    /// Переход на новую улицу.
    StreetChanged { phase: RoundPhase },

    /// Раздача дошла до Complete.
    HandFinished { pot: Chips },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Карты, как их сдали – до того, как fold их очистил.
    pub fn dealt_hole_cards(&self) -> Vec<Vec<Card>> {
        let mut dealt = vec![Vec::new(); SEATS];
        for event in &self.events {
            if let HandEventKind::HoleCardsDealt { seat, cards } = &event.kind {
                if let Some(slot) = dealt.get_mut(*seat as usize) {
                    slot.clone_from(cards);
                }
            }
        }
        dealt
    }

    /// Принятые действия по порядку.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.events.iter().filter_map(|e| match &e.kind {
            HandEventKind::PlayerActed { action, .. } => Some(action),
            _ => None,
        })
    }

    /// Все открытые карты борда по порядку.
    pub fn board_cards(&self) -> Vec<Card> {
        self.events
            .iter()
            .filter_map(|e| match &e.kind {
                HandEventKind::BoardDealt { cards, .. } => Some(cards.iter().copied()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Короткая запись раздачи: коды действий через `:`, последним сегментом –
    /// борд одной строкой (если он открывался). Пример: `b40:c:f:x:Ah7c2d`.
    pub fn action_sequence(&self) -> String {
        let mut parts: Vec<String> = self.actions().map(Action::sequence_code).collect();
        let board = self.board_cards();
        if !board.is_empty() {
            parts.push(concat_codes(&board));
        }
        parts.join(":")
    }
}
