use holdem_engine::domain::{
    chips::Chips,
    hand::RoundPhase,
    player::PlayerStatus,
    table::{TableConfig, SEATS},
};
use holdem_engine::engine::{
    hand_history::HandEventKind, Action, ActionKind, ActionOutcome, EngineError, HandEngine, Pot,
};
use holdem_engine::infra::DeterministicRng;

fn new_engine(seed: u64) -> HandEngine<DeterministicRng> {
    let mut engine = HandEngine::new(TableConfig::default(), DeterministicRng::from_seed(seed));
    engine.reset();
    engine
}

fn apply_ok(engine: &mut HandEngine<DeterministicRng>, action: Action) -> bool {
    match engine.apply_action(action.clone()) {
        ActionOutcome::Applied { round_advanced } => round_advanced,
        ActionOutcome::Rejected(err) => panic!("action {action:?} rejected: {err}"),
    }
}

/// Префлоп из семи действий: bet, call, fold и чеки до возврата хода к месту 2.
fn play_preflop(engine: &mut HandEngine<DeterministicRng>) -> bool {
    let script = [
        Action::bet(2, 40),
        Action::call(3),
        Action::fold(4),
        Action::check(5),
        Action::check(0),
        Action::check(1),
    ];
    for action in script {
        assert!(!apply_ok(engine, action), "street must not change mid-orbit");
    }
    apply_ok(engine, Action::check(2))
}

/// Один круг чеков, начиная с места на ходу. Возвращает, сменилась ли улица.
fn check_around(engine: &mut HandEngine<DeterministicRng>) -> bool {
    for _ in 0..SEATS {
        let seat = engine.current_seat();
        if apply_ok(engine, Action::check(seat)) {
            return true;
        }
    }
    false
}

//
// reset
//
#[test]
fn reset_starts_fresh_preflop() {
    let engine = new_engine(1);

    assert_eq!(engine.phase(), RoundPhase::Preflop);
    assert_eq!(engine.current_seat(), 2);
    assert_eq!(engine.pot(), Chips::ZERO);
    assert!(engine.board().is_empty());
    assert!(engine.action_log().is_empty());
    assert_eq!(engine.hand_number(), 1);

    assert_eq!(engine.players().len(), SEATS);
    for p in engine.players() {
        assert_eq!(p.stack, Chips(10_000));
        assert_eq!(p.hole_cards.len(), 2);
        assert_eq!(p.status, PlayerStatus::Active);
    }
}

#[test]
fn reset_after_play_restores_everything() {
    let mut engine = new_engine(2);
    assert!(play_preflop(&mut engine));
    assert_eq!(engine.phase(), RoundPhase::Flop);

    engine.reset();

    assert_eq!(engine.hand_number(), 2);
    assert_eq!(engine.phase(), RoundPhase::Preflop);
    assert_eq!(engine.current_seat(), 2);
    assert_eq!(engine.pot(), Chips::ZERO);
    assert!(engine.board().is_empty());
    assert!(engine.action_log().is_empty());
    assert!(engine.contributions().iter().all(|c| c.is_zero()));
    for p in engine.players() {
        assert_eq!(p.stack, Chips(10_000));
        assert_eq!(p.hole_cards.len(), 2);
        assert_eq!(p.status, PlayerStatus::Active);
    }
}

#[test]
fn reset_records_deal_in_history() {
    let engine = new_engine(3);
    let history = engine.history();

    assert!(matches!(
        history.events[0].kind,
        HandEventKind::HandStarted { hand_number: 1 }
    ));

    let dealt = history.dealt_hole_cards();
    for (seat, p) in engine.players().iter().enumerate() {
        assert_eq!(dealt[seat], p.hole_cards);
    }

    assert!(history.events.iter().any(|e| matches!(
        e.kind,
        HandEventKind::BlindsNarrated { dealer: 2, .. }
    )));
}

//
// apply_action
//
#[test]
fn bet_moves_chips_and_passes_turn() {
    let mut engine = new_engine(4);

    apply_ok(&mut engine, Action::bet(2, 40));

    assert_eq!(engine.pot(), Chips(40));
    assert_eq!(engine.players()[2].stack, Chips(9_960));
    assert_eq!(engine.current_seat(), 3);
    assert_eq!(engine.action_log(), &[Action::bet(2, 40)]);
    assert_eq!(engine.contributions()[2], Chips(40));
}

#[test]
fn call_is_illegal_before_any_chips_move() {
    let mut engine = new_engine(5);

    assert!(!engine.validate_action(&Action::call(2)));
    assert_eq!(
        engine.apply_action(Action::call(2)),
        ActionOutcome::Rejected(EngineError::NothingToCall)
    );
    assert!(engine.action_log().is_empty());
    assert_eq!(engine.current_seat(), 2);
}

#[test]
fn fold_keeps_stack_and_drops_cards() {
    let mut engine = new_engine(6);

    apply_ok(&mut engine, Action::fold(2));

    let p = &engine.players()[2];
    assert_eq!(p.stack, Chips(10_000));
    assert!(p.hole_cards.is_empty());
    assert_eq!(p.status, PlayerStatus::Folded);
    assert_eq!(engine.pot(), Chips::ZERO);
    assert_eq!(engine.current_seat(), 3);
}

#[test]
fn faithful_call_does_not_move_chips() {
    let mut engine = new_engine(7);

    apply_ok(&mut engine, Action::bet(2, 40));
    apply_ok(&mut engine, Action::call(3));

    assert_eq!(engine.pot(), Chips(40));
    assert_eq!(engine.players()[3].stack, Chips(10_000));
    assert_eq!(engine.action_log()[1].kind, ActionKind::Call);
    assert_eq!(engine.action_log()[1].amount, None);
}

//
// круг ставок по счётчику
//
#[test]
fn seventh_action_by_first_seat_opens_flop() {
    let mut engine = new_engine(8);

    assert!(play_preflop(&mut engine));

    assert_eq!(engine.phase(), RoundPhase::Flop);
    assert_eq!(engine.board().len(), 3);
    assert_eq!(engine.pot(), Chips(40));
    assert_eq!(engine.action_log().len(), 7);
    assert_eq!(engine.current_seat(), 3);
}

#[test]
fn first_seat_acting_early_does_not_close_round() {
    let mut engine = new_engine(9);

    for _ in 0..SEATS {
        let seat = engine.current_seat();
        assert!(!apply_ok(&mut engine, Action::check(seat)));
    }
    // Шесть чеков: ход снова у места 2, но лог ещё не длиннее 6.
    assert_eq!(engine.phase(), RoundPhase::Preflop);
    assert_eq!(engine.current_seat(), 2);

    assert!(apply_ok(&mut engine, Action::check(2)));
    assert_eq!(engine.phase(), RoundPhase::Flop);
}

#[test]
fn streets_run_through_to_complete() {
    let mut engine = new_engine(10);
    assert!(play_preflop(&mut engine));

    assert!(check_around(&mut engine));
    assert_eq!(engine.phase(), RoundPhase::Turn);
    assert_eq!(engine.board().len(), 4);

    assert!(check_around(&mut engine));
    assert_eq!(engine.phase(), RoundPhase::River);
    assert_eq!(engine.board().len(), 5);

    assert!(check_around(&mut engine));
    assert_eq!(engine.phase(), RoundPhase::Complete);
    assert_eq!(engine.board().len(), 5);
    assert!(engine.is_hand_over());

    assert!(matches!(
        engine.history().events.last().map(|e| &e.kind),
        Some(HandEventKind::HandFinished { pot }) if *pot == Chips(40)
    ));
}

#[test]
fn nothing_is_legal_after_complete() {
    let mut engine = new_engine(11);
    assert!(play_preflop(&mut engine));
    for _ in 0..3 {
        assert!(check_around(&mut engine));
    }
    assert_eq!(engine.phase(), RoundPhase::Complete);

    let seat = engine.current_seat();
    assert_eq!(
        engine.check_action(&Action::fold(seat)),
        Err(EngineError::HandComplete(RoundPhase::Complete))
    );
    assert!(!engine.apply_action(Action::check(seat)).is_applied());
}

//
// next_round / deal_board
//
#[test]
fn next_round_on_complete_is_noop() {
    let mut engine = new_engine(12);
    assert!(play_preflop(&mut engine));
    for _ in 0..3 {
        check_around(&mut engine);
    }
    let board = engine.board().to_vec();
    let events = engine.history().len();

    assert!(!engine.next_round());
    assert_eq!(engine.phase(), RoundPhase::Complete);
    assert_eq!(engine.board(), board.as_slice());
    assert_eq!(engine.history().len(), events);
}

#[test]
fn next_round_on_short_preflop_is_noop() {
    let mut engine = new_engine(13);
    apply_ok(&mut engine, Action::bet(2, 40));

    assert!(!engine.next_round());
    assert_eq!(engine.phase(), RoundPhase::Preflop);
    assert!(engine.board().is_empty());
}

#[test]
fn next_round_deals_expected_board_sizes() {
    let mut engine = new_engine(14);
    assert!(play_preflop(&mut engine));
    assert_eq!(engine.board().len(), 3);

    assert!(engine.next_round());
    assert_eq!(engine.phase(), RoundPhase::Turn);
    assert_eq!(engine.board().len(), 4);

    assert!(engine.next_round());
    assert_eq!(engine.phase(), RoundPhase::River);
    assert_eq!(engine.board().len(), 5);

    assert!(engine.next_round());
    assert_eq!(engine.phase(), RoundPhase::Complete);
    assert_eq!(engine.board().len(), 5);
}

#[test]
fn deal_board_returns_cards_without_placing_them() {
    let mut engine = new_engine(15);

    assert_eq!(engine.deal_board(3).len(), 3);
    assert_eq!(engine.deal_board(1).len(), 1);
    assert!(engine.deal_board(0).is_empty());
    assert!(engine.board().is_empty());
}

//
// validate_action
//
#[test]
fn validate_action_is_pure() {
    let mut engine = new_engine(16);
    apply_ok(&mut engine, Action::bet(2, 40));

    let players = engine.players().to_vec();
    let pot = engine.pot();
    let log = engine.action_log().to_vec();
    let history_len = engine.history().len();

    let candidates = [
        Action::fold(3),
        Action::check(3),
        Action::call(3),
        Action::bet(3, 40),
        Action::raise(3, 10),
        Action::all_in(3),
        Action::bet(0, 40),
    ];
    for action in &candidates {
        let first = engine.validate_action(action);
        let second = engine.validate_action(action);
        assert_eq!(first, second, "validate must be deterministic for {action:?}");
    }

    assert_eq!(engine.players(), players.as_slice());
    assert_eq!(engine.pot(), pot);
    assert_eq!(engine.action_log(), log.as_slice());
    assert_eq!(engine.history().len(), history_len);
    assert_eq!(engine.current_seat(), 3);
}

#[test]
fn action_sequence_reads_like_the_hand() {
    let mut engine = new_engine(17);
    assert!(play_preflop(&mut engine));

    let seq = engine.history().action_sequence();
    let board: String = engine.board().iter().map(|c| c.code()).collect();
    assert_eq!(seq, format!("b40:c:f:x:x:x:x:{board}"));
}

//
// pot.rs
//
#[test]
fn pot_tracks_total_and_contributions() {
    let mut pot = Pot::new();
    pot.add(2, Chips(40));
    pot.add(3, Chips(100));
    pot.add(2, Chips(60));
    pot.add(9, Chips(500));

    assert_eq!(pot.total, Chips(200));
    assert_eq!(pot.contribution(2), Chips(100));
    assert_eq!(pot.contribution(3), Chips(100));
    assert_eq!(pot.contribution(9), Chips::ZERO);

    pot.reset();
    assert_eq!(pot.total, Chips::ZERO);
    assert!(pot.contributions().iter().all(|c| c.is_zero()));
}
