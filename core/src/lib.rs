pub mod combat;
pub mod constants;
pub mod error;
pub mod hash;
pub mod init;
pub mod input;
pub mod physics;
pub mod replay;
pub mod scheduler;
pub mod snapshot;
pub mod step;
pub mod timer;
pub mod types;

pub use combat::{resolve_attack_hits, try_attack, Hit};
pub use constants::*;
pub use error::{ConfigError, SessionError};
pub use hash::*;
pub use init::*;
pub use input::{apply_event, key_down, key_up};
pub use physics::{resolve_platform_landing, update_player};
pub use replay::run_session;
pub use scheduler::Scheduler;
pub use snapshot::{draw_list, snapshot, DrawCommand, PlayerView, Snapshot};
pub use step::step_mut;
pub use types::*;
