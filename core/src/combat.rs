use tracing::{debug, trace};

use crate::constants::*;
use crate::types::*;

/// Start a swing if the cooldown has elapsed. Returns whether a swing started.
///
/// A player who never attacked may always swing; otherwise strictly more than
/// `ATTACK_COOLDOWN_MS` must separate two activations.
pub fn try_attack(p: &mut Player, now: Millis) -> bool {
    let ready = match p.last_attack_at {
        None => true,
        Some(last) => now.saturating_sub(last) > ATTACK_COOLDOWN_MS,
    };
    if !ready {
        trace!(slot = ?p.slot, now, "attack ignored, cooling down");
        return false;
    }

    p.attacking = true;
    p.last_attack_at = Some(now);
    p.attack_ends_at = Some(now.saturating_add(ATTACK_DURATION_MS));
    trace!(slot = ?p.slot, now, "attack started");
    true
}

/// End a swing whose deadline has passed.
pub fn expire_attack(p: &mut Player, now: Millis) {
    if let Some(end) = p.attack_ends_at {
        if now >= end {
            p.attacking = false;
            p.attack_ends_at = None;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub attacker: PlayerSlot,
    pub defender: PlayerSlot,
}

/// Horizontal knockback sign pushing `defender` away from `attacker`.
/// Dead-centre overlaps push player Two right and player One left.
fn knockback_direction(attacker: &Player, defender: &Player) -> f64 {
    let (a, d) = (attacker.center_x(), defender.center_x());
    if d > a {
        1.0
    } else if d < a {
        -1.0
    } else {
        match defender.slot {
            PlayerSlot::Two => 1.0,
            PlayerSlot::One => -1.0,
        }
    }
}

/// Resolve one direction of attack-box vs body overlap.
fn resolve_hit(attacker: &mut Player, defender: &mut Player) -> Option<Hit> {
    if !attacker.attacking || !attacker.attack_box.overlaps(&defender.body()) {
        return None;
    }

    defender.health -= ATTACK_DAMAGE;
    defender.velocity.x = KNOCKBACK_SPEED * knockback_direction(attacker, defender);
    // One connection per swing
    attacker.attacking = false;
    attacker.attack_ends_at = None;

    debug!(
        attacker = ?attacker.slot,
        defender = ?defender.slot,
        health = defender.health,
        "attack connected"
    );
    Some(Hit {
        attacker: attacker.slot,
        defender: defender.slot,
    })
}

/// Check One→Two then Two→One. Both may connect in the same frame.
pub fn resolve_attack_hits(players: &mut [Player; 2]) -> Vec<Hit> {
    let [one, two] = players;
    let mut hits = Vec::new();
    hits.extend(resolve_hit(one, two));
    hits.extend(resolve_hit(two, one));
    hits
}
