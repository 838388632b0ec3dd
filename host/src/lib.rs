//! Headless replay of recorded sessions.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use platduel_core::snapshot::health_percent;
use platduel_core::{
    hash_events, hash_state, run_session, validate_config, MatchConfig, Outcome, Session,
};
use serde::Serialize;

/// Final result of a replayed session, printed as JSON.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub frames: u64,
    pub countdown: u32,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
    pub health: [i32; 2],
    pub health_percent: [f64; 2],
    pub events: usize,
    /// SHA-256 of the input log, hex.
    pub events_hash: String,
    /// SHA-256 of the final match state, hex.
    pub state_hash: String,
}

/// Read a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

pub fn parse_session(json: &str) -> anyhow::Result<Session> {
    serde_json::from_str(json).context("failed to parse session JSON")
}

pub fn parse_config(json: &str) -> anyhow::Result<MatchConfig> {
    let config: MatchConfig =
        serde_json::from_str(json).context("failed to parse match config JSON")?;
    validate_config(&config)?;
    Ok(config)
}

pub fn replay(session: &Session) -> anyhow::Result<ReplaySummary> {
    tracing::info!(
        events = session.events.len(),
        countdown_secs = session.config.countdown_secs,
        frame_interval_ms = session.config.frame_interval_ms,
        "replaying session"
    );
    let state = run_session(session).context("session rejected")?;
    let [one, two] = &state.players;

    let summary = ReplaySummary {
        frames: state.frame,
        countdown: state.countdown.remaining,
        game_over: state.is_over(),
        outcome: state.outcome,
        health: [one.health, two.health],
        health_percent: [health_percent(one.health), health_percent(two.health)],
        events: session.events.len(),
        events_hash: hex::encode(hash_events(&session.events)),
        state_hash: hex::encode(hash_state(&state)),
    };
    tracing::info!(frames = summary.frames, outcome = ?summary.outcome, "replay finished");
    Ok(summary)
}
