// Distances are in surface pixels, velocities in pixels per frame, times in ms.

// Surface
pub const ARENA_WIDTH: f64 = 800.0;
pub const ARENA_HEIGHT: f64 = 600.0;

// Physics
pub const GRAVITY: f64 = 0.5;
pub const MOVE_SPEED: f64 = 5.0;
pub const JUMP_VELOCITY: f64 = -15.0;

// Player body
pub const PLAYER_WIDTH: f64 = 50.0;
pub const PLAYER_HEIGHT: f64 = 50.0;

// Attack box sits flush with the body and extends to the right
pub const ATTACK_BOX_WIDTH: f64 = 100.0;
pub const ATTACK_BOX_HEIGHT: f64 = 50.0;

// Health / combat
pub const MAX_HEALTH: i32 = 100;
pub const ATTACK_DAMAGE: i32 = 10;
pub const ATTACK_COOLDOWN_MS: u64 = 500;
pub const ATTACK_DURATION_MS: u64 = 100;
pub const KNOCKBACK_SPEED: f64 = 10.0;

// Match clock
pub const COUNTDOWN_SECS: u32 = 10;
/// Longest configurable match (one hour).
pub const MAX_COUNTDOWN_SECS: u32 = 3600;
pub const TIMER_INTERVAL_MS: u64 = 1000;

// ~60 Hz display refresh
pub const FRAME_INTERVAL_MS: u64 = 16;

// Spawn positions
pub const PLAYER_ONE_SPAWN: (f64, f64) = (100.0, 100.0);
pub const PLAYER_TWO_SPAWN: (f64, f64) = (650.0, 100.0);

// Presentation
pub const PLAYER_ONE_COLOR: &str = "blue";
pub const PLAYER_TWO_COLOR: &str = "green";
pub const PLATFORM_COLOR: &str = "gray";
pub const ATTACK_BOX_COLOR: &str = "red";
pub const GAME_OVER_COLOR: &str = "white";
pub const GAME_OVER_FONT: &str = "50px Arial";
pub const GAME_OVER_TEXT: &str = "Game Over";
