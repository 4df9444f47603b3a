use log::{debug, info};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::RoundPhase;
use crate::domain::player::PlayerState;
use crate::domain::table::{ChipPolicy, DealingMode, RoundClosure, SeatIndex, TableConfig, SEATS};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{first_seat_from, next_seat, next_seat_where};
use crate::engine::pot::Pot;
use crate::engine::validation::{validate_action, ActionContext};
use crate::engine::RandomSource;
use crate::infra::rng::SystemRng;

/// Сколько действий должно накопиться в логе, чтобы круг по счётчику закрылся.
const ORBIT_LEN: usize = SEATS;

/// Результат `apply_action`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Действие принято. `round_advanced` – была ли смена улицы после него.
    Applied { round_advanced: bool },
    /// Действие нелегально – состояние не изменилось.
    Rejected(EngineError),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied { .. })
    }
}

/// Движок одной раздачи за 6-max столом.
///
/// Один владелец, последовательные вызовы, без блокировок.
/// Для нескольких столов – по движку на стол.
pub struct HandEngine<R: RandomSource = SystemRng> {
    config: TableConfig,
    rng: R,
    deck: Deck,
    players: [PlayerState; SEATS],
    pot: Pot,
    current_seat: SeatIndex,
    phase: RoundPhase,
    board: Vec<Card>,
    action_log: Vec<Action>,
    betting: BettingState,
    history: HandHistory,
    hand_number: u64,
}

impl HandEngine<SystemRng> {
    /// Движок с системным RNG и конфигом по умолчанию.
    pub fn with_defaults() -> Self {
        Self::new(TableConfig::default(), SystemRng)
    }
}

impl<R: RandomSource> HandEngine<R> {
    /// Создать движок. Карты ещё не сданы – раздачу начинает `reset`.
    pub fn new(config: TableConfig, rng: R) -> Self {
        let stack = config.starting_stack;
        let first = config.first_to_act;
        Self {
            config,
            rng,
            deck: Deck::empty(),
            players: std::array::from_fn(|_| PlayerState::new(stack)),
            pot: Pot::new(),
            current_seat: first,
            phase: RoundPhase::Preflop,
            board: Vec::new(),
            action_log: Vec::new(),
            betting: BettingState::new(),
            history: HandHistory::new(),
            hand_number: 0,
        }
    }

    /// Новая раздача: стеки к стартовым, банк/борд/лог очищены,
    /// Preflop, ход у `first_to_act`, каждому месту по 2 карты.
    pub fn reset(&mut self) {
        self.hand_number += 1;

        self.deck = match self.config.dealing {
            DealingMode::WithReplacement => Deck::empty(),
            DealingMode::ShuffledDeck => {
                let mut deck = Deck::standard_52();
                self.rng.shuffle(&mut deck.cards);
                deck
            }
        };

        let stack = self.config.starting_stack;
        for p in self.players.iter_mut() {
            *p = PlayerState::new(stack);
        }

        self.pot.reset();
        self.board.clear();
        self.action_log.clear();
        self.betting = BettingState::new();
        self.history = HandHistory::new();
        self.phase = RoundPhase::Preflop;
        self.current_seat = self.config.first_to_act;

        self.history.push(HandEventKind::HandStarted {
            hand_number: self.hand_number,
        });

        for seat in 0..SEATS {
            let cards = self.draw_cards(2);
            self.players[seat].hole_cards = cards.clone();
            self.history.push(HandEventKind::HoleCardsDealt {
                seat: seat as SeatIndex,
                cards,
            });
        }

        let positions = self.config.positions;
        self.history.push(HandEventKind::BlindsNarrated {
            dealer: positions.dealer,
            small_blind: (positions.small_blind, self.config.stakes.small_blind),
            big_blind: (positions.big_blind, self.config.stakes.big_blind),
        });

        info!(
            "hand #{} started: stack={}, first to act={}",
            self.hand_number, stack, self.current_seat
        );
    }

    /// Почему действие нелегально (или `Ok`, если легально). Ничего не меняет.
    pub fn check_action(&self, action: &Action) -> Result<(), EngineError> {
        let ctx = ActionContext {
            config: &self.config,
            phase: self.phase,
            current_seat: self.current_seat,
            player: self.players.get(self.current_seat as usize),
            action_log: &self.action_log,
            betting: &self.betting,
        };
        validate_action(&ctx, action)
    }

    /// Легально ли действие для места на ходу. Источник истины для UI.
    pub fn validate_action(&self, action: &Action) -> bool {
        self.check_action(action).is_ok()
    }

    /// Применить действие. Нелегальное действие ничего не меняет.
    pub fn apply_action(&mut self, action: Action) -> ActionOutcome {
        if let Err(err) = self.check_action(&action) {
            debug!("action rejected: {:?} ({})", action, err);
            return ActionOutcome::Rejected(err);
        }

        let seat = action.seat;
        let idx = seat as usize;
        let policy = self.config.effective_chip_policy();

        let moved = {
            let owed = self.betting.owed(seat);
            let player = &mut self.players[idx];
            match (action.kind, action.amount) {
                (ActionKind::Fold, _) => {
                    player.fold();
                    Chips::ZERO
                }
                (ActionKind::Check, _) => Chips::ZERO,
                (ActionKind::Call, _) => match policy {
                    ChipPolicy::Faithful => Chips::ZERO,
                    ChipPolicy::Corrected => player.take_chips(owed),
                },
                (ActionKind::Bet | ActionKind::Raise | ActionKind::AllIn, Some(amount)) => {
                    player.take_chips(amount)
                }
                (ActionKind::AllIn, None) => match policy {
                    ChipPolicy::Faithful => Chips::ZERO,
                    ChipPolicy::Corrected => {
                        let stack = player.stack;
                        player.take_chips(stack)
                    }
                },
                // Bet/Raise без суммы не проходят валидацию.
                (ActionKind::Bet | ActionKind::Raise, None) => Chips::ZERO,
            }
        };

        if !moved.is_zero() {
            self.pot.add(seat, moved);
        }
        self.betting.commit(seat, moved);
        self.betting.mark_acted(seat);

        // В исправленном режиме в лог идут реально внесённые фишки.
        let logged = if action.amount.is_none() && !moved.is_zero() {
            Action { amount: Some(moved), ..action }
        } else {
            action
        };

        debug!(
            "seat {} {}{} -> pot {}",
            seat,
            logged.kind,
            logged.amount.map(|a| format!(" {a}")).unwrap_or_default(),
            self.pot.total
        );

        self.history.push(HandEventKind::PlayerActed {
            action: logged.clone(),
            stack_after: self.players[idx].stack,
            pot_after: self.pot.total,
        });
        self.action_log.push(logged);

        let round_advanced = match self.config.round_closure {
            RoundClosure::OrbitCount => self.advance_by_orbit(seat),
            RoundClosure::MatchedCommitments => self.advance_by_commitments(seat),
        };

        ActionOutcome::Applied { round_advanced }
    }

    /// Круг по счётчику: ход дошёл обратно до `first_to_act`, оно сходило,
    /// и в логе больше 6 действий. Следующая улица начинается со следующего места.
    fn advance_by_orbit(&mut self, acted_seat: SeatIndex) -> bool {
        self.current_seat = next_seat(acted_seat);
        if acted_seat == self.config.first_to_act && self.action_log.len() > ORBIT_LEN {
            return self.next_round();
        }
        false
    }

    /// Круг по вкладам: все, кто может ходить, уравняли ставку.
    fn advance_by_commitments(&mut self, acted_seat: SeatIndex) -> bool {
        if self.holding_cards_count() <= 1 {
            // Раздача решена без вскрытия – улицы больше не открываем,
            // ход переходит к последнему месту с картами.
            if let Some(seat) =
                first_seat_from(&self.players, acted_seat, |_, p| p.is_holding_cards())
            {
                self.current_seat = seat;
            }
            return false;
        }

        if !self.betting.is_round_complete(&self.players) {
            let betting = &self.betting;
            if let Some(seat) =
                next_seat_where(&self.players, acted_seat, |s, p| betting.needs_action(s, p))
            {
                self.current_seat = seat;
            }
            return false;
        }

        // Круг закрыт. Если ходить некому – докладываем борд до конца.
        let mut advanced = false;
        while self.next_round() {
            advanced = true;
            if self.phase == RoundPhase::Complete {
                break;
            }
            if self.players.iter().filter(|p| p.can_act()).count() >= 2 {
                let start = next_seat(self.config.positions.dealer);
                if let Some(seat) = first_seat_from(&self.players, start, |_, p| p.can_act()) {
                    self.current_seat = seat;
                }
                break;
            }
        }
        advanced
    }

    /// Перейти на следующую улицу. `Complete` – no-op.
    ///
    /// С Preflop по счётчику уходим только при логе длиннее 6 действий.
    /// Возвращает `true`, если фаза сменилась.
    pub fn next_round(&mut self) -> bool {
        if self.phase == RoundPhase::Preflop
            && self.config.round_closure == RoundClosure::OrbitCount
            && self.action_log.len() <= ORBIT_LEN
        {
            return false;
        }

        let Some(next) = self.phase.next() else {
            return false;
        };

        let cards = self.deal_board(next.cards_on_entry());
        if !cards.is_empty() {
            self.board.extend_from_slice(&cards);
            self.history.push(HandEventKind::BoardDealt { phase: next, cards });
        }

        self.phase = next;
        self.betting = BettingState::new();
        self.history.push(HandEventKind::StreetChanged { phase: next });

        if next == RoundPhase::Complete {
            self.history.push(HandEventKind::HandFinished {
                pot: self.pot.total,
            });
        }

        info!("phase -> {} (board {} cards)", next, self.board.len());
        true
    }

    /// Выдать `count` карт. Сами карты на борд не кладутся.
    pub fn deal_board(&mut self, count: usize) -> Vec<Card> {
        self.draw_cards(count)
    }

    fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        (0..count).map(|_| self.draw_card()).collect()
    }

    fn draw_card(&mut self) -> Card {
        match self.config.dealing {
            DealingMode::WithReplacement => self.random_card(),
            // 12 карманных + 5 на борд всегда влезают в 52 карты.
            DealingMode::ShuffledDeck => match self.deck.draw_one() {
                Some(card) => card,
                None => self.random_card(),
            },
        }
    }

    fn random_card(&mut self) -> Card {
        let rank = Rank::ALL[self.rng.gen_index(Rank::ALL.len())];
        let suit = Suit::ALL[self.rng.gen_index(Suit::ALL.len())];
        Card::new(rank, suit)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn player(&self, seat: SeatIndex) -> Option<&PlayerState> {
        self.players.get(seat as usize)
    }

    pub fn pot(&self) -> Chips {
        self.pot.total
    }

    pub fn current_seat(&self) -> SeatIndex {
        self.current_seat
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn action_log(&self) -> &[Action] {
        &self.action_log
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    pub fn betting(&self) -> &BettingState {
        &self.betting
    }

    /// Сколько всего фишек внесло каждое место за раздачу.
    pub fn contributions(&self) -> &[Chips; SEATS] {
        self.pot.contributions()
    }

    /// Номер текущей раздачи (0 – ещё ни одного `reset`).
    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }

    /// Сколько мест ещё держат карты.
    pub fn holding_cards_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_holding_cards()).count()
    }

    /// Раздача окончена: дошли до Complete или карты держит ≤ 1 места.
    pub fn is_hand_over(&self) -> bool {
        self.phase == RoundPhase::Complete || self.holding_cards_count() <= 1
    }
}
