use tracing::info;

use crate::combat::{expire_attack, resolve_attack_hits, Hit};
use crate::input::horizontal_velocity;
use crate::physics::{resolve_platform_landing, update_player};
use crate::types::*;

/// Per-frame transition, applied in place at clock reading `now`.
///
/// Sub-step order:
///  0. No-op once the match is over
///  1. Expire swings whose deadline has passed
///  2. Update both bodies (attack box sync, integrate, gravity/floor)
///  3. Horizontal velocity from held keys
///  4. Platform landing (overrides gravity from 2)
///  5. Attack hits, One→Two then Two→One
///  6. Knockout check
///  7. Advance frame counter
///
/// Knockback written in 5 is integrated by the next frame's step 2 before
/// step 3 overwrites it.
pub fn step_mut(state: &mut MatchState, config: &MatchConfig, now: Millis) -> Vec<Hit> {
    // 0.
    if state.is_over() {
        return Vec::new();
    }

    // 1.
    for p in state.players.iter_mut() {
        expire_attack(p, now);
    }

    // 2.
    for p in state.players.iter_mut() {
        update_player(p, &config.arena);
    }

    // 3.
    for p in state.players.iter_mut() {
        p.velocity.x = horizontal_velocity(&state.keys, &config.controls[p.slot.index()]);
    }

    // 4.
    for p in state.players.iter_mut() {
        resolve_platform_landing(p, &config.arena.platforms);
    }

    // 5.
    let hits = resolve_attack_hits(&mut state.players);

    // 6.
    if let Some(outcome) = ko_outcome(&state.players) {
        end_match(state, outcome);
    }

    // 7.
    state.frame += 1;
    hits
}

/// `Some` when at least one player is out of health. A double KO draws.
pub fn ko_outcome(players: &[Player; 2]) -> Option<Outcome> {
    match (players[0].health <= 0, players[1].health <= 0) {
        (false, false) => None,
        (true, true) => Some(Outcome::Draw),
        (true, false) => Some(Outcome::Winner(PlayerSlot::Two)),
        (false, true) => Some(Outcome::Winner(PlayerSlot::One)),
    }
}

/// Enter the terminal GameOver phase. The first outcome recorded sticks.
pub(crate) fn end_match(state: &mut MatchState, outcome: Outcome) {
    if state.is_over() {
        return;
    }
    state.phase = Phase::GameOver;
    state.outcome = Some(outcome);
    info!(
        frame = state.frame,
        ?outcome,
        health_one = state.players[0].health,
        health_two = state.players[1].health,
        countdown = state.countdown.remaining,
        "game over"
    );
}
