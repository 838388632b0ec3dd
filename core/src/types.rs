use serde::{Deserialize, Serialize};

use crate::constants::*;

// ── Primitives ──────────────────────────────────────────────

/// Monotonic clock reading in milliseconds.
pub type Millis = u64;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned box, origin top-left, Y down.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive on all four edges: boxes that merely touch overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() >= other.x
            && self.x <= other.right()
            && self.bottom() >= other.y
            && self.y <= other.bottom()
    }
}

// ── Input ───────────────────────────────────────────────────

/// The eight logical keys the game listens to.
/// Serialized as their `KeyboardEvent.key` names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "d")]
    D,
    #[serde(rename = "w")]
    W,
    #[serde(rename = " ", alias = "Space")]
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Enter,
}

impl Key {
    pub const COUNT: usize = 8;

    pub const ALL: [Key; Key::COUNT] = [
        Key::A,
        Key::D,
        Key::W,
        Key::Space,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::ArrowUp,
        Key::Enter,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a browser `KeyboardEvent.key` value. Unknown keys are ignored by callers.
    pub fn from_event_key(key: &str) -> Option<Self> {
        match key {
            "a" => Some(Self::A),
            "d" => Some(Self::D),
            "w" => Some(Self::W),
            " " => Some(Self::Space),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "Enter" => Some(Self::Enter),
            _ => None,
        }
    }

    pub fn event_key(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::D => "d",
            Self::W => "w",
            Self::Space => " ",
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::ArrowUp => "ArrowUp",
            Self::Enter => "Enter",
        }
    }
}

/// Pressed flags for held (movement) keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    pressed: [bool; Key::COUNT],
}

impl KeyMap {
    pub fn press(&mut self, key: Key) {
        self.pressed[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.pressed[key.index()] = false;
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }
}

/// One player's key bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub left: Key,
    pub right: Key,
    pub jump: Key,
    pub attack: Key,
}

impl Controls {
    pub fn player_one() -> Self {
        Controls {
            left: Key::A,
            right: Key::D,
            jump: Key::W,
            attack: Key::Space,
        }
    }

    pub fn player_two() -> Self {
        Controls {
            left: Key::ArrowLeft,
            right: Key::ArrowRight,
            jump: Key::ArrowUp,
            attack: Key::Enter,
        }
    }

    pub fn keys(&self) -> [Key; 4] {
        [self.left, self.right, self.jump, self.attack]
    }

    pub fn is_movement(&self, key: Key) -> bool {
        key == self.left || key == self.right
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Down,
    Up,
}

/// A key event stamped with the clock reading it arrived at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub at_ms: Millis,
    pub action: KeyAction,
    pub key: Key,
}

// ── Player ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub slot: PlayerSlot,
    pub position: Vec2,
    pub velocity: Vec2,
    pub width: f64,
    pub height: f64,
    pub color: String,
    /// Can dip below zero on the killing blow; displays clamp it.
    pub health: i32,
    pub jumping: bool,
    pub attack_box: Rect,
    pub attacking: bool,
    pub last_attack_at: Option<Millis>,
    /// Deadline after which an active swing stops.
    pub attack_ends_at: Option<Millis>,
}

impl Player {
    pub fn new(slot: PlayerSlot, spawn: Vec2, color: impl Into<String>) -> Self {
        Player {
            slot,
            position: spawn,
            velocity: Vec2 { x: 0.0, y: 0.0 },
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            color: color.into(),
            health: MAX_HEALTH,
            jumping: false,
            attack_box: Rect {
                x: spawn.x,
                y: spawn.y,
                width: ATTACK_BOX_WIDTH,
                height: ATTACK_BOX_HEIGHT,
            },
            attacking: false,
            last_attack_at: None,
            attack_ends_at: None,
        }
    }

    pub fn body(&self) -> Rect {
        Rect {
            x: self.position.x,
            y: self.position.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.position.x + self.width / 2.0
    }
}

// ── Map ─────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Platform {
    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    /// The floor sits at this Y coordinate.
    pub height: f64,
    pub platforms: Vec<Platform>,
    /// Index = player slot.
    pub spawn_points: [Vec2; 2],
}

// ── Match ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    /// Terminal: no transition back to Running.
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(PlayerSlot),
    Draw,
}

/// Seconds left on the match clock and when the next second elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub remaining: u32,
    pub next_tick_at: Millis,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Frames simulated while Running.
    pub frame: u64,
    /// Index = player slot.
    pub players: [Player; 2],
    pub keys: KeyMap,
    pub countdown: Countdown,
    pub phase: Phase,
    /// Set exactly when the phase becomes GameOver.
    pub outcome: Option<Outcome>,
}

impl MatchState {
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

// ── Config ──────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub arena: Arena,
    pub countdown_secs: u32,
    pub frame_interval_ms: Millis,
    /// Index = player slot.
    pub colors: [String; 2],
    /// Index = player slot.
    pub controls: [Controls; 2],
}

impl Default for MatchConfig {
    fn default() -> Self {
        crate::init::default_config()
    }
}

// ── Sessions ────────────────────────────────────────────────

/// A recorded match: config plus every key event in arrival order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub config: MatchConfig,
    pub events: Vec<InputEvent>,
}
