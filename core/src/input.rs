use crate::combat::try_attack;
use crate::constants::*;
use crate::types::*;

/// Press handling. Movement keys latch; jump and attack act immediately.
/// Ignored once the match is over.
pub fn key_down(state: &mut MatchState, config: &MatchConfig, key: Key, now: Millis) {
    if state.is_over() {
        return;
    }
    for slot in PlayerSlot::ALL {
        let controls = &config.controls[slot.index()];
        if controls.is_movement(key) {
            state.keys.press(key);
        } else if key == controls.jump {
            let p = state.player_mut(slot);
            // No double jump
            if !p.jumping {
                p.velocity.y = JUMP_VELOCITY;
                p.jumping = true;
            }
        } else if key == controls.attack {
            try_attack(state.player_mut(slot), now);
        }
    }
}

/// Release handling. Only movement keys are held, so only they clear.
pub fn key_up(state: &mut MatchState, config: &MatchConfig, key: Key) {
    if config.controls.iter().any(|c| c.is_movement(key)) {
        state.keys.release(key);
    }
}

/// Apply an `InputEvent` recorded or received from the presentation layer.
pub fn apply_event(state: &mut MatchState, config: &MatchConfig, event: &InputEvent) {
    match event.action {
        KeyAction::Down => key_down(state, config, event.key, event.at_ms),
        KeyAction::Up => key_up(state, config, event.key),
    }
}

/// Horizontal velocity from held keys. Left wins when both are held.
pub fn horizontal_velocity(keys: &KeyMap, controls: &Controls) -> f64 {
    if keys.is_pressed(controls.left) {
        -MOVE_SPEED
    } else if keys.is_pressed(controls.right) {
        MOVE_SPEED
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{create_initial_state, default_config};

    #[test]
    fn event_key_names_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_event_key(key.event_key()), Some(key));
        }
        assert_eq!(Key::from_event_key("x"), None);
        assert_eq!(Key::from_event_key("A"), None);
    }

    #[test]
    fn movement_keys_latch_until_release() {
        let config = default_config();
        let mut state = create_initial_state(&config, 0);
        key_down(&mut state, &config, Key::D, 0);
        assert!(state.keys.is_pressed(Key::D));
        assert_eq!(horizontal_velocity(&state.keys, &config.controls[0]), MOVE_SPEED);

        key_down(&mut state, &config, Key::A, 0);
        assert_eq!(horizontal_velocity(&state.keys, &config.controls[0]), -MOVE_SPEED);

        key_up(&mut state, &config, Key::A);
        key_up(&mut state, &config, Key::D);
        assert_eq!(horizontal_velocity(&state.keys, &config.controls[0]), 0.0);
    }

    #[test]
    fn players_move_independently() {
        let config = default_config();
        let mut state = create_initial_state(&config, 0);
        key_down(&mut state, &config, Key::ArrowLeft, 0);
        assert_eq!(horizontal_velocity(&state.keys, &config.controls[0]), 0.0);
        assert_eq!(horizontal_velocity(&state.keys, &config.controls[1]), -MOVE_SPEED);
    }

    #[test]
    fn jump_impulse_only_when_not_jumping() {
        let config = default_config();
        let mut state = create_initial_state(&config, 0);
        key_down(&mut state, &config, Key::W, 0);
        assert_eq!(state.players[0].velocity.y, JUMP_VELOCITY);
        assert!(state.players[0].jumping);
        assert!(!state.players[1].jumping);

        state.players[0].velocity.y = -3.0;
        key_down(&mut state, &config, Key::W, 10);
        assert_eq!(state.players[0].velocity.y, -3.0);
    }

    #[test]
    fn jump_and_attack_do_not_latch() {
        let config = default_config();
        let mut state = create_initial_state(&config, 0);
        key_down(&mut state, &config, Key::ArrowUp, 0);
        key_down(&mut state, &config, Key::Enter, 0);
        assert!(!state.keys.is_pressed(Key::ArrowUp));
        assert!(!state.keys.is_pressed(Key::Enter));
        assert!(state.players[1].attacking);
    }

    #[test]
    fn input_ignored_after_game_over() {
        let config = default_config();
        let mut state = create_initial_state(&config, 0);
        state.phase = Phase::GameOver;
        key_down(&mut state, &config, Key::W, 0);
        key_down(&mut state, &config, Key::Space, 0);
        key_down(&mut state, &config, Key::D, 0);
        assert!(!state.players[0].jumping);
        assert!(!state.players[0].attacking);
        assert!(!state.keys.is_pressed(Key::D));
    }
}
