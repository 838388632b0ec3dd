use tracing::debug;

use crate::constants::TIMER_INTERVAL_MS;
use crate::error::SessionError;
use crate::init::{create_initial_state, validate_config};
use crate::input::apply_event;
use crate::scheduler::Scheduler;
use crate::types::*;

/// Reject sessions whose events go backwards in time.
pub fn validate_events(events: &[InputEvent]) -> Result<(), SessionError> {
    for (index, pair) in events.windows(2).enumerate() {
        if pair[1].at_ms < pair[0].at_ms {
            return Err(SessionError::OutOfOrder {
                index: index + 1,
                at_ms: pair[1].at_ms,
                previous_ms: pair[0].at_ms,
            });
        }
    }
    Ok(())
}

/// Replay a recorded session from clock zero until the match ends.
///
/// Frames and clock ticks due before an event run first, then the event
/// applies at its timestamp. After the last event the match runs on until
/// the countdown expires, so every replay terminates.
pub fn run_session(session: &Session) -> Result<MatchState, SessionError> {
    validate_config(&session.config)?;
    validate_events(&session.events)?;

    let config = &session.config;
    let mut state = create_initial_state(config, 0);
    let mut sched = Scheduler::new(0, config.frame_interval_ms);

    for event in &session.events {
        sched.advance(&mut state, config, event.at_ms);
        if state.is_over() {
            debug!(at_ms = event.at_ms, "match over, remaining events dropped");
            break;
        }
        apply_event(&mut state, config, event);
    }

    let deadline = u64::from(config.countdown_secs) * TIMER_INTERVAL_MS;
    let last_event = session.events.last().map_or(0, |e| e.at_ms);
    sched.advance(&mut state, config, deadline.max(last_event));
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::init::default_config;

    fn down(at_ms: Millis, key: Key) -> InputEvent {
        InputEvent { at_ms, action: KeyAction::Down, key }
    }

    #[test]
    fn empty_session_times_out() {
        let session = Session { config: default_config(), events: vec![] };
        let state = run_session(&session).unwrap();
        assert!(state.is_over());
        assert_eq!(state.countdown.remaining, 0);
        assert_eq!(state.outcome, Some(Outcome::Draw));
    }

    #[test]
    fn out_of_order_events_rejected() {
        let session = Session {
            config: default_config(),
            events: vec![down(100, Key::W), down(50, Key::D)],
        };
        assert_eq!(
            run_session(&session),
            Err(SessionError::OutOfOrder { index: 1, at_ms: 50, previous_ms: 100 })
        );
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = default_config();
        config.countdown_secs = 0;
        let session = Session { config, events: vec![] };
        assert!(matches!(run_session(&session), Err(SessionError::Config(_))));
    }

    #[test]
    fn overlong_countdown_rejected_before_simulating() {
        let mut config = default_config();
        config.countdown_secs = u32::MAX;
        let session = Session { config, events: vec![] };
        assert!(matches!(
            run_session(&session),
            Err(SessionError::Config(ConfigError::CountdownTooLong { .. }))
        ));
    }

    #[test]
    fn replay_is_deterministic() {
        let events = vec![
            down(0, Key::D),
            down(40, Key::ArrowLeft),
            down(300, Key::W),
            down(320, Key::Space),
            down(900, Key::Enter),
            InputEvent { at_ms: 1500, action: KeyAction::Up, key: Key::D },
            down(2100, Key::Space),
        ];
        let session = Session { config: default_config(), events };
        let a = run_session(&session).unwrap();
        let b = run_session(&session).unwrap();
        assert_eq!(a, b);
    }
}
