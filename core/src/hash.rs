use sha2::{Digest, Sha256};

use crate::types::{InputEvent, Key, KeyAction, MatchState, Outcome, Phase};

/// SHA-256 of an input log: `at_ms`, action and key per event.
pub fn hash_events(events: &[InputEvent]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for e in events {
        hasher.update(e.at_ms.to_le_bytes());
        hasher.update([
            match e.action {
                KeyAction::Down => 0u8,
                KeyAction::Up => 1u8,
            },
            e.key.index() as u8,
        ]);
    }
    hasher.finalize().into()
}

/// SHA-256 fingerprint of the simulation-relevant match state.
pub fn hash_state(s: &MatchState) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(s.frame.to_le_bytes());
    hasher.update(s.countdown.remaining.to_le_bytes());
    hasher.update(s.countdown.next_tick_at.to_le_bytes());
    hasher.update([match s.phase {
        Phase::Running => 0u8,
        Phase::GameOver => 1u8,
    }]);
    hasher.update([match s.outcome {
        None => 0u8,
        Some(Outcome::Draw) => 1,
        Some(Outcome::Winner(slot)) => 2 + slot.index() as u8,
    }]);
    // Held keys as a bitmask in `Key::ALL` order
    let held = Key::ALL
        .iter()
        .filter(|&&k| s.keys.is_pressed(k))
        .fold(0u16, |mask, &k| mask | 1 << k.index());
    hasher.update(held.to_le_bytes());
    for p in &s.players {
        hasher.update(p.position.x.to_le_bytes());
        hasher.update(p.position.y.to_le_bytes());
        hasher.update(p.velocity.x.to_le_bytes());
        hasher.update(p.velocity.y.to_le_bytes());
        hasher.update(p.health.to_le_bytes());
        hasher.update([p.jumping as u8, p.attacking as u8]);
        hasher.update(p.last_attack_at.unwrap_or(u64::MAX).to_le_bytes());
        hasher.update(p.attack_ends_at.unwrap_or(u64::MAX).to_le_bytes());
    }
    hasher.finalize().into()
}
