use crate::api::dto::{HandViewDto, LegalActionsDto, SeatDto};
use crate::domain::chips::Chips;
use crate::domain::table::{player_label, SeatIndex};
use crate::engine::{Action, HandEngine, RandomSource};

/// Какие действия легальны для места на ходу при сумме ставки `bet_amount`.
///
/// Считается только через `validate_action` – отдельной логики у панели нет.
pub fn legal_actions<R: RandomSource>(engine: &HandEngine<R>, bet_amount: Chips) -> LegalActionsDto {
    let seat = engine.current_seat();
    let ok = |action: Action| engine.validate_action(&action);

    LegalActionsDto {
        fold: ok(Action::fold(seat)),
        check: ok(Action::check(seat)),
        call: ok(Action::call(seat)),
        bet: ok(Action::bet(seat, bet_amount.0)),
        raise: ok(Action::raise(seat, bet_amount.0)),
        all_in: ok(Action::all_in(seat)),
    }
}

/// Собрать DTO раздачи. `reveal(seat)` решает, показывать ли карты места.
pub fn build_hand_view<R: RandomSource>(
    engine: &HandEngine<R>,
    bet_amount: Chips,
    reveal: impl Fn(SeatIndex) -> bool,
) -> HandViewDto {
    let dealer = engine.config().positions.dealer;
    let current = engine.current_seat();

    let seats = engine
        .players()
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let seat = idx as SeatIndex;
            SeatDto {
                seat,
                label: player_label(seat),
                stack: p.stack,
                status: p.status,
                hole_cards: reveal(seat).then(|| p.hole_cards.clone()),
                is_dealer: seat == dealer,
                is_current: seat == current,
            }
        })
        .collect();

    HandViewDto {
        hand_number: engine.hand_number(),
        phase: engine.phase(),
        pot: engine.pot(),
        board: engine.board().to_vec(),
        current_seat: current,
        seats,
        legal_actions: legal_actions(engine, bet_amount),
        bet_amount,
        hand_over: engine.is_hand_over(),
    }
}
