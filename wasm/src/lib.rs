use platduel_core::snapshot::health_percent;
use platduel_core::{
    self as sim, create_initial_state, default_config, validate_config, Key, MatchConfig,
    MatchState, Millis, PlayerSlot,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Install panic hook so WASM panics show in browser console instead of silently freezing.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// DOMHighResTimeStamp → clock millis. Negative or NaN readings clamp to 0.
#[inline(always)]
fn to_millis(now: f64) -> Millis {
    if now.is_finite() && now > 0.0 {
        now as Millis
    } else {
        0
    }
}

/// HUD values for the health bars and timer text.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsHud {
    frame: u64,
    countdown: u32,
    game_over: bool,
    /// 0 / 1 for a winning slot, -1 for a draw or a match still running.
    winner: i32,
    health: [i32; 2],
    health_percent: [f64; 2],
}

fn hud_from_state(s: &MatchState) -> JsHud {
    let winner = match s.outcome {
        Some(sim::Outcome::Winner(slot)) => slot.index() as i32,
        _ => -1,
    };
    JsHud {
        frame: s.frame,
        countdown: s.countdown.remaining,
        game_over: s.is_over(),
        winner,
        health: [s.players[0].health, s.players[1].health],
        health_percent: [
            health_percent(s.players[0].health),
            health_percent(s.players[1].health),
        ],
    }
}

fn parse_config(config_json: &str) -> MatchConfig {
    let config: MatchConfig = match serde_json::from_str(config_json) {
        Ok(c) => c,
        Err(e) => {
            // Fallback: stock arena and controls
            warn(&format!("platduel: bad config JSON ({e}), using defaults"));
            return default_config();
        }
    };
    if let Err(e) = validate_config(&config) {
        warn(&format!("platduel: rejected config ({e}), using defaults"));
        return default_config();
    }
    config
}

#[wasm_bindgen]
pub struct WasmMatch {
    state: MatchState,
    config: MatchConfig,
}

#[wasm_bindgen]
impl WasmMatch {
    /// Create a match from config JSON (see `MatchConfig`), starting at `now`.
    /// `now` and every later timestamp must come from the same clock
    /// (`performance.now()` / rAF / `event.timeStamp`).
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, now: f64) -> WasmMatch {
        let config = parse_config(config_json);
        let state = create_initial_state(&config, to_millis(now));
        WasmMatch { state, config }
    }

    /// Create with the stock arena and controls.
    pub fn new_default(now: f64) -> WasmMatch {
        let config = default_config();
        let state = create_initial_state(&config, to_millis(now));
        WasmMatch { state, config }
    }

    /// Forward a `keydown` event's `key`. Returns false for keys the game ignores.
    pub fn key_down(&mut self, key: &str, now: f64) -> bool {
        match Key::from_event_key(key) {
            Some(k) => {
                sim::key_down(&mut self.state, &self.config, k, to_millis(now));
                true
            }
            None => false,
        }
    }

    /// Forward a `keyup` event's `key`. Returns false for keys the game ignores.
    pub fn key_up(&mut self, key: &str) -> bool {
        match Key::from_event_key(key) {
            Some(k) => {
                sim::key_up(&mut self.state, &self.config, k);
                true
            }
            None => false,
        }
    }

    /// One animation frame: fire due clock seconds, then simulate.
    /// Returns whether the caller should request another frame.
    pub fn frame(&mut self, now: f64) -> bool {
        let now = to_millis(now);
        sim::timer::advance(&mut self.state, now);
        sim::step_mut(&mut self.state, &self.config, now);
        !self.state.is_over()
    }

    /// HUD values: countdown, health, health-bar percentages, winner.
    pub fn hud(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&hud_from_state(&self.state)).map_err(JsValue::from)
    }

    /// Full presentation snapshot.
    pub fn export_snapshot(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&sim::snapshot(&self.state)).map_err(JsValue::from)
    }

    /// Canvas calls for the current frame, each tagged with `op`.
    pub fn draw_list(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&sim::draw_list(&self.state, &self.config))
            .map_err(JsValue::from)
    }

    /// Full match state as JSON (for save/restore or debugging).
    pub fn export_state(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_default()
    }

    /// Restore state produced by `export_state`. Returns false and keeps the
    /// current state if the value does not parse.
    pub fn import_state(&mut self, state: JsValue) -> bool {
        // JSON.stringify → serde_json: strings pass through, objects get serialized
        let json_str = if let Some(s) = state.as_string() {
            s
        } else {
            match js_sys::JSON::stringify(&state) {
                Ok(s) => String::from(s),
                Err(_) => return false,
            }
        };
        match serde_json::from_str::<MatchState>(&json_str) {
            Ok(s) => {
                self.state = s;
                true
            }
            Err(e) => {
                warn(&format!("platduel: import_state failed ({e})"));
                false
            }
        }
    }

    /// Clone the match (for what-if previews).
    pub fn clone_match(&self) -> WasmMatch {
        WasmMatch {
            state: self.state.clone(),
            config: self.config.clone(),
        }
    }

    // Quick accessors
    pub fn frame_count(&self) -> u64 { self.state.frame }
    pub fn countdown(&self) -> u32 { self.state.countdown.remaining }
    pub fn game_over(&self) -> bool { self.state.is_over() }
    pub fn health_one(&self) -> i32 { self.state.player(PlayerSlot::One).health }
    pub fn health_two(&self) -> i32 { self.state.player(PlayerSlot::Two).health }
}
