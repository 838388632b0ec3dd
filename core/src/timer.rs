use tracing::debug;

use crate::constants::TIMER_INTERVAL_MS;
use crate::step::end_match;
use crate::types::*;

/// Fire every elapsed second of the match clock up to `now`.
/// Reaching zero ends the match; once the match is over the clock stops.
pub fn advance(state: &mut MatchState, now: Millis) {
    while !state.is_over() && now >= state.countdown.next_tick_at {
        state.countdown.remaining = state.countdown.remaining.saturating_sub(1);
        state.countdown.next_tick_at =
            state.countdown.next_tick_at.saturating_add(TIMER_INTERVAL_MS);
        debug!(remaining = state.countdown.remaining, "match clock tick");

        if state.countdown.remaining == 0 {
            let outcome = time_up_outcome(&state.players);
            end_match(state, outcome);
        }
    }
}

/// Clock ran out: more health wins, equal health draws.
pub fn time_up_outcome(players: &[Player; 2]) -> Outcome {
    let (one, two) = (players[0].health, players[1].health);
    if one > two {
        Outcome::Winner(PlayerSlot::One)
    } else if two > one {
        Outcome::Winner(PlayerSlot::Two)
    } else {
        Outcome::Draw
    }
}
