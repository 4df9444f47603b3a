use crate::domain::{PlayerState, SeatIndex, SEATS};

/// Следующее место по кругу, без всяких проверок.
pub fn next_seat(seat: SeatIndex) -> SeatIndex {
    ((seat as usize + 1) % SEATS) as SeatIndex
}

/// Места по кругу, начиная со `start` (включительно).
pub fn seats_from(start: SeatIndex) -> impl Iterator<Item = SeatIndex> {
    (0..SEATS).map(move |i| ((start as usize + i) % SEATS) as SeatIndex)
}

/// Первое место по кругу начиная со `start` (включительно), подходящее под условие.
pub fn first_seat_from(
    players: &[PlayerState],
    start: SeatIndex,
    pred: impl Fn(SeatIndex, &PlayerState) -> bool,
) -> Option<SeatIndex> {
    seats_from(start).find(|&seat| {
        players
            .get(seat as usize)
            .map(|p| pred(seat, p))
            .unwrap_or(false)
    })
}

/// Первое подходящее место по кругу после `after` (сам `after` проверяется последним).
pub fn next_seat_where(
    players: &[PlayerState],
    after: SeatIndex,
    pred: impl Fn(SeatIndex, &PlayerState) -> bool,
) -> Option<SeatIndex> {
    first_seat_from(players, next_seat(after), pred)
}
