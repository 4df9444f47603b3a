// src/bin/holdem_dev_cli.rs

use holdem_engine::api::{
    action_line, execute, hand_end_lines, hand_start_lines, legal_actions, ActionRecord, Command,
    CommandResponse,
};
use holdem_engine::domain::table::{player_label, SeatIndex, SEATS};
use holdem_engine::engine::{HandEngine, RandomSource};
use holdem_engine::infra::{
    fallback_winnings, record_to_action, submission_from_engine, table_config_from_env,
    HandStore, InMemoryHandStore, SystemRng,
};

/// Защита от зацикливания сценария.
const MAX_STEPS: usize = 64;

fn main() {
    env_logger::init();
    println!("holdem_dev_cli: стартуем dev-CLI одной раздачи…");

    let config = match table_config_from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("[CLI] Конфиг стола не загружен: {err}");
            std::process::exit(1);
        }
    };

    let mut engine = HandEngine::new(config, SystemRng);
    let mut store = InMemoryHandStore::new();

    println!();
    println!("================ HAND =================");

    if let Err(err) = execute(&mut engine, Command::Reset) {
        eprintln!("[CLI] Не удалось начать раздачу: {err:?}");
        std::process::exit(1);
    }
    for line in hand_start_lines(&engine) {
        println!("{line}");
    }

    let first = engine.current_seat();
    let mut script = preflop_script(first, engine.config().min_bet.0).into_iter();

    for _ in 0..MAX_STEPS {
        if engine.is_hand_over() {
            break;
        }

        // После заготовленного префлопа: check, если можно, иначе call, иначе fold.
        let record = script.next().unwrap_or_else(|| passive_action(&engine));

        let line = record_to_action(&record).map(|a| action_line(&a));
        match execute(&mut engine, Command::Act(record)) {
            Ok(response) => {
                if let Ok(line) = line {
                    println!("{line}");
                }
                let view = response.view();
                println!(
                    "[CLI]   phase={} pot={} board={} next=P{}",
                    view.phase,
                    view.pot,
                    view.board.iter().map(|c| c.code()).collect::<Vec<_>>().join(" "),
                    view.current_seat as usize + 1
                );
                if let CommandResponse::HandFinished { .. } = response {
                    break;
                }
            }
            Err(err) => {
                println!("[CLI]   действие отклонено: {err:?}");
            }
        }
    }

    let submission = submission_from_engine(&engine);
    let winnings = single_holder(&engine)
        .and_then(|winner| fallback_winnings(engine.contributions(), winner).ok());

    let id = match store.save(submission, winnings) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("[CLI] Раздача не сохранена: {err}");
            std::process::exit(1);
        }
    };

    println!("---");
    for line in hand_end_lines(&id.to_string(), engine.pot()) {
        println!("{line}");
    }
    println!("[CLI] action_sequence: {}", engine.history().action_sequence());

    match serde_json::to_string_pretty(&store.find_all(10, 0)) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("[CLI] Не удалось сериализовать историю: {err}"),
    }

    println!("[CLI] Завершение работы dev-CLI.");
}

/// Префлоп: bet минимальной ставкой, call, fold, дальше чеки до конца круга.
fn preflop_script(first: SeatIndex, bet: u64) -> Vec<ActionRecord> {
    let seat = |offset: usize| player_label(((first as usize + offset) % SEATS) as SeatIndex);
    let simple = |kind: &str, offset: usize| ActionRecord {
        kind: kind.to_string(),
        player: seat(offset),
        amount: None,
    };

    vec![
        ActionRecord {
            kind: "bet".to_string(),
            player: seat(0),
            amount: Some(bet),
        },
        simple("call", 1),
        simple("fold", 2),
        simple("check", 3),
        simple("check", 4),
        simple("check", 5),
        simple("check", 0),
    ]
}

fn passive_action<R: RandomSource>(engine: &HandEngine<R>) -> ActionRecord {
    let legal = legal_actions(engine, engine.config().min_bet);
    let kind = if legal.check {
        "check"
    } else if legal.call {
        "call"
    } else {
        "fold"
    };
    ActionRecord {
        kind: kind.to_string(),
        player: player_label(engine.current_seat()),
        amount: None,
    }
}

/// Единственное место с картами, если раздача решилась фолдами.
fn single_holder<R: RandomSource>(engine: &HandEngine<R>) -> Option<SeatIndex> {
    let mut holders = engine
        .players()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_holding_cards());
    match (holders.next(), holders.next()) {
        (Some((seat, _)), None) => Some(seat as SeatIndex),
        _ => None,
    }
}
