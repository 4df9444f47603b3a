//! Property-тесты движка: случайные последовательности действий
//! не ломают учёт фишек, фазы и борд.

use holdem_engine::domain::{
    hand::RoundPhase,
    table::{ChipPolicy, RoundClosure, TableConfig, SEATS},
};
use holdem_engine::engine::{Action, ActionKind, HandEngine};
use holdem_engine::infra::DeterministicRng;
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = TableConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(corrected, matched)| TableConfig {
        chip_policy: if corrected {
            ChipPolicy::Corrected
        } else {
            ChipPolicy::Faithful
        },
        round_closure: if matched {
            RoundClosure::MatchedCommitments
        } else {
            RoundClosure::OrbitCount
        },
        ..TableConfig::default()
    })
}

// Тип действия и сумма; место всегда берётся текущее.
fn step_strategy() -> impl Strategy<Value = (usize, Option<u64>)> {
    (0usize..ActionKind::ALL.len(), prop::option::of(0u64..12_000))
}

fn to_action(engine: &HandEngine<DeterministicRng>, (kind, amount): (usize, Option<u64>)) -> Action {
    Action::new(
        ActionKind::ALL[kind],
        engine.current_seat(),
        amount.map(holdem_engine::domain::chips::Chips),
    )
}

proptest! {
    #[test]
    fn chips_are_conserved_and_stacks_bounded(
        config in config_strategy(),
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 0..80),
    ) {
        let start = config.starting_stack.0;
        let mut engine = HandEngine::new(config, DeterministicRng::from_seed(seed));
        engine.reset();

        for step in steps {
            let action = to_action(&engine, step);
            engine.apply_action(action);

            let stacks: u64 = engine.players().iter().map(|p| p.stack.0).sum();
            prop_assert_eq!(stacks + engine.pot().0, start * SEATS as u64);
            prop_assert!(engine.players().iter().all(|p| p.stack.0 <= start));
        }
    }

    #[test]
    fn phase_and_board_stay_in_step(
        config in config_strategy(),
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 0..80),
    ) {
        let mut engine = HandEngine::new(config, DeterministicRng::from_seed(seed));
        engine.reset();
        let mut phase = engine.phase();

        for step in steps {
            let action = to_action(&engine, step);
            engine.apply_action(action);

            prop_assert!(engine.phase() >= phase);
            prop_assert_eq!(engine.board().len(), engine.phase().board_len());
            phase = engine.phase();
        }
        if phase == RoundPhase::Complete {
            prop_assert!(!engine.next_round());
        }
    }

    #[test]
    fn validate_answers_match_apply(
        config in config_strategy(),
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 0..60),
    ) {
        let mut engine = HandEngine::new(config, DeterministicRng::from_seed(seed));
        engine.reset();

        for step in steps {
            let action = to_action(&engine, step);
            let legal = engine.validate_action(&action);
            prop_assert_eq!(legal, engine.validate_action(&action));

            let log_len = engine.action_log().len();
            let outcome = engine.apply_action(action);
            prop_assert_eq!(outcome.is_applied(), legal);
            if !legal {
                prop_assert_eq!(engine.action_log().len(), log_len);
            }
        }
    }
}
