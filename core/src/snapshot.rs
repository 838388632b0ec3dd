//! Presentation-facing views of a match. The simulation never touches a
//! display; HUDs and renderers consume these instead.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub slot: PlayerSlot,
    pub body: Rect,
    pub color: String,
    pub health: i32,
    /// Health-bar width in percent, clamped to 0..=100.
    pub health_percent: f64,
    pub jumping: bool,
    pub attacking: bool,
    pub attack_box: Rect,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub countdown: u32,
    pub game_over: bool,
    pub outcome: Option<Outcome>,
    pub players: [PlayerView; 2],
}

/// Percentage of `MAX_HEALTH`, never below 0 even after an overkill blow.
pub fn health_percent(health: i32) -> f64 {
    (health as f64 / MAX_HEALTH as f64 * 100.0).clamp(0.0, 100.0)
}

fn player_view(p: &Player) -> PlayerView {
    PlayerView {
        slot: p.slot,
        body: p.body(),
        color: p.color.clone(),
        health: p.health,
        health_percent: health_percent(p.health),
        jumping: p.jumping,
        attacking: p.attacking,
        attack_box: p.attack_box,
    }
}

pub fn snapshot(state: &MatchState) -> Snapshot {
    Snapshot {
        frame: state.frame,
        countdown: state.countdown.remaining,
        game_over: state.is_over(),
        outcome: state.outcome,
        players: [player_view(&state.players[0]), player_view(&state.players[1])],
    }
}

/// One 2D canvas call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    FillRect { rect: Rect, color: String },
    FillText { text: String, x: f64, y: f64, font: String, color: String },
}

/// Full redraw of the current state: platforms, then bodies with active
/// attack boxes, then the Game Over banner once the match has ended.
pub fn draw_list(state: &MatchState, config: &MatchConfig) -> Vec<DrawCommand> {
    let arena = &config.arena;
    let mut cmds = vec![DrawCommand::Clear { width: arena.width, height: arena.height }];

    cmds.extend(arena.platforms.iter().map(|plat| DrawCommand::FillRect {
        rect: plat.bounds(),
        color: PLATFORM_COLOR.to_string(),
    }));

    for p in &state.players {
        cmds.push(DrawCommand::FillRect { rect: p.body(), color: p.color.clone() });
        if p.attacking {
            cmds.push(DrawCommand::FillRect {
                rect: p.attack_box,
                color: ATTACK_BOX_COLOR.to_string(),
            });
        }
    }

    if state.is_over() {
        cmds.push(DrawCommand::FillText {
            text: GAME_OVER_TEXT.to_string(),
            x: arena.width / 2.0 - 150.0,
            y: arena.height / 2.0,
            font: GAME_OVER_FONT.to_string(),
            color: GAME_OVER_COLOR.to_string(),
        });
    }
    cmds
}
