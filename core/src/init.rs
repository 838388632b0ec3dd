use crate::constants::*;
use crate::error::ConfigError;
use crate::types::*;

/// 800x600 arena with a wide centre ledge and two raised side ledges.
pub fn arena() -> Arena {
    Arena {
        width: ARENA_WIDTH,
        height: ARENA_HEIGHT,
        platforms: vec![
            // Centre
            Platform { x: 200.0, y: 400.0, width: 400.0, height: 20.0 },
            // Upper left / right
            Platform { x: 100.0, y: 250.0, width: 200.0, height: 20.0 },
            Platform { x: 500.0, y: 250.0, width: 200.0, height: 20.0 },
        ],
        spawn_points: [
            Vec2 { x: PLAYER_ONE_SPAWN.0, y: PLAYER_ONE_SPAWN.1 },
            Vec2 { x: PLAYER_TWO_SPAWN.0, y: PLAYER_TWO_SPAWN.1 },
        ],
    }
}

/// Stock match: default arena, 10 second clock, WASD/space vs arrows/enter.
pub fn default_config() -> MatchConfig {
    MatchConfig {
        arena: arena(),
        countdown_secs: COUNTDOWN_SECS,
        frame_interval_ms: FRAME_INTERVAL_MS,
        colors: [PLAYER_ONE_COLOR.to_string(), PLAYER_TWO_COLOR.to_string()],
        controls: [Controls::player_one(), Controls::player_two()],
    }
}

pub fn validate_config(config: &MatchConfig) -> Result<(), ConfigError> {
    if config.countdown_secs == 0 {
        return Err(ConfigError::ZeroCountdown);
    }
    if config.countdown_secs > MAX_COUNTDOWN_SECS {
        return Err(ConfigError::CountdownTooLong {
            secs: config.countdown_secs,
            max: MAX_COUNTDOWN_SECS,
        });
    }
    if config.frame_interval_ms == 0 {
        return Err(ConfigError::ZeroFrameInterval);
    }
    let (width, height) = (config.arena.width, config.arena.height);
    if !(width > 0.0 && height > 0.0) {
        return Err(ConfigError::InvalidArena { width, height });
    }

    let mut seen = KeyMap::default();
    for key in config.controls.iter().flat_map(Controls::keys) {
        if seen.is_pressed(key) {
            return Err(ConfigError::ConflictingBinding(key));
        }
        seen.press(key);
    }
    Ok(())
}

/// Create the match state at clock reading `start`.
/// The first countdown second elapses one interval after `start`.
pub fn create_initial_state(config: &MatchConfig, start: Millis) -> MatchState {
    let players = PlayerSlot::ALL.map(|slot| {
        Player::new(
            slot,
            config.arena.spawn_points[slot.index()],
            config.colors[slot.index()].clone(),
        )
    });

    MatchState {
        frame: 0,
        players,
        keys: KeyMap::default(),
        countdown: Countdown {
            remaining: config.countdown_secs,
            next_tick_at: start.saturating_add(TIMER_INTERVAL_MS),
        },
        phase: Phase::Running,
        outcome: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_correct() {
        let config = default_config();
        let state = create_initial_state(&config, 0);
        assert_eq!(state.frame, 0);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.outcome, None);
        assert_eq!(state.countdown.remaining, 10);
        assert_eq!(state.countdown.next_tick_at, 1000);

        let p1 = state.player(PlayerSlot::One);
        assert_eq!(p1.position, Vec2 { x: 100.0, y: 100.0 });
        assert_eq!(p1.health, MAX_HEALTH);
        assert_eq!(p1.color, "blue");
        assert!(!p1.jumping);
        assert!(!p1.attacking);
        assert_eq!(p1.last_attack_at, None);

        let p2 = state.player(PlayerSlot::Two);
        assert_eq!(p2.position, Vec2 { x: 650.0, y: 100.0 });
        assert_eq!(p2.color, "green");
    }

    #[test]
    fn arena_structure() {
        let a = arena();
        assert_eq!(a.width, 800.0);
        assert_eq!(a.height, 600.0);
        assert_eq!(a.platforms.len(), 3);
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&default_config()), Ok(()));
    }

    #[test]
    fn rejects_zero_countdown_and_interval() {
        let mut config = default_config();
        config.countdown_secs = 0;
        assert_eq!(validate_config(&config), Err(ConfigError::ZeroCountdown));

        let mut config = default_config();
        config.frame_interval_ms = 0;
        assert_eq!(validate_config(&config), Err(ConfigError::ZeroFrameInterval));
    }

    #[test]
    fn rejects_overlong_countdown() {
        let mut config = default_config();
        config.countdown_secs = MAX_COUNTDOWN_SECS;
        assert_eq!(validate_config(&config), Ok(()));

        config.countdown_secs = u32::MAX;
        assert_eq!(
            validate_config(&config),
            Err(ConfigError::CountdownTooLong { secs: u32::MAX, max: MAX_COUNTDOWN_SECS })
        );
    }

    #[test]
    fn start_near_clock_limit_saturates() {
        let state = create_initial_state(&default_config(), u64::MAX - 10);
        assert_eq!(state.countdown.next_tick_at, u64::MAX);
    }

    #[test]
    fn rejects_degenerate_arena() {
        let mut config = default_config();
        config.arena.height = 0.0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidArena { .. })
        ));
    }

    #[test]
    fn rejects_shared_key() {
        let mut config = default_config();
        config.controls[1].attack = Key::Space;
        assert_eq!(
            validate_config(&config),
            Err(ConfigError::ConflictingBinding(Key::Space))
        );
    }
}
