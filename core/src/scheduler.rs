use crate::step::step_mut;
use crate::timer;
use crate::types::*;

/// Drives the frame loop and the match clock from a monotonic clock.
///
/// Frames fire at a fixed interval starting at the start time; the match
/// clock fires on its own one-second deadlines. Anything due at the same
/// instant resolves clock first, then frame. Once the match is over no
/// further frames are scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduler {
    next_frame_at: Millis,
    frame_interval: Millis,
}

impl Scheduler {
    pub fn new(start: Millis, frame_interval: Millis) -> Self {
        Scheduler {
            next_frame_at: start,
            frame_interval: frame_interval.max(1),
        }
    }

    pub fn next_frame_at(&self) -> Millis {
        self.next_frame_at
    }

    /// Run everything due at or before `now`. Returns the number of frames run.
    pub fn advance(&mut self, state: &mut MatchState, config: &MatchConfig, now: Millis) -> u32 {
        let mut frames = 0;
        while !state.is_over() && self.next_frame_at <= now {
            let at = self.next_frame_at;
            timer::advance(state, at);
            if state.is_over() {
                break;
            }
            step_mut(state, config, at);
            self.next_frame_at = self.next_frame_at.saturating_add(self.frame_interval);
            frames += 1;
        }
        timer::advance(state, now);
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{create_initial_state, default_config};

    #[test]
    fn first_frame_fires_at_start() {
        let config = default_config();
        let mut state = create_initial_state(&config, 0);
        let mut sched = Scheduler::new(0, 16);
        assert_eq!(sched.advance(&mut state, &config, 0), 1);
        assert_eq!(state.frame, 1);
        assert_eq!(sched.next_frame_at(), 16);
    }

    #[test]
    fn frames_fire_at_fixed_interval() {
        let config = default_config();
        let mut state = create_initial_state(&config, 0);
        let mut sched = Scheduler::new(0, 16);
        // 0, 16, ..., 992
        assert_eq!(sched.advance(&mut state, &config, 999), 63);
        assert_eq!(state.countdown.remaining, 10);
        assert_eq!(sched.advance(&mut state, &config, 1000), 0);
        assert_eq!(state.countdown.remaining, 9);
    }

    #[test]
    fn idle_match_ends_when_clock_runs_out() {
        let config = default_config();
        let mut state = create_initial_state(&config, 0);
        let mut sched = Scheduler::new(0, config.frame_interval_ms);
        sched.advance(&mut state, &config, 60_000);
        assert!(state.is_over());
        assert_eq!(state.countdown.remaining, 0);
        assert_eq!(state.outcome, Some(Outcome::Draw));
        // Frames at 0, 16, ..., 9984; the clock wins the tie at 10_000
        assert_eq!(state.frame, 625);
    }
}
