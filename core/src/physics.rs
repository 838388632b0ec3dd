use crate::constants::*;
use crate::types::*;

/// Per-frame body update: sync the attack box, integrate, then gravity or floor.
///
/// The attack box follows the position from *before* integration, so a swing
/// lands where the player was drawn. The floor test looks one step ahead: once
/// `bottom + vy` reaches the floor the player stops falling, without snapping.
pub fn update_player(p: &mut Player, arena: &Arena) {
    p.attack_box.x = p.position.x;
    p.attack_box.y = p.position.y;

    p.position.x += p.velocity.x;
    p.position.y += p.velocity.y;

    if p.bottom() + p.velocity.y >= arena.height {
        p.velocity.y = 0.0;
        p.jumping = false;
    } else {
        p.velocity.y += GRAVITY;
    }
}

/// True when the player is about to cross the platform's top surface from above.
pub fn is_landing(p: &Player, plat: &Platform) -> bool {
    let feet = p.bottom();
    feet <= plat.top()
        && feet + p.velocity.y >= plat.top()
        && p.position.x + p.width >= plat.x
        && p.position.x <= plat.x + plat.width
}

/// One-way platforms: stop a falling player on any top surface it is about to cross.
/// Runs after `update_player`, so it overrides the gravity applied there.
pub fn resolve_platform_landing(p: &mut Player, platforms: &[Platform]) {
    for plat in platforms {
        if is_landing(p, plat) {
            p.velocity.y = 0.0;
            p.jumping = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::arena;

    fn player_at(x: f64, y: f64) -> Player {
        Player::new(PlayerSlot::One, Vec2 { x, y }, "blue")
    }

    #[test]
    fn gravity_increases_vy_in_free_air() {
        let mut p = player_at(20.0, 100.0);
        update_player(&mut p, &arena());
        assert_eq!(p.velocity.y, GRAVITY);
        assert_eq!(p.position.y, 100.0);

        update_player(&mut p, &arena());
        assert_eq!(p.velocity.y, 2.0 * GRAVITY);
        assert_eq!(p.position.y, 100.0 + GRAVITY);
    }

    #[test]
    fn floor_stops_fall_and_clears_jump() {
        let mut p = player_at(20.0, 540.0);
        p.velocity.y = 6.0;
        p.jumping = true;
        update_player(&mut p, &arena());
        // 546 + 50 + 6 >= 600
        assert_eq!(p.position.y, 546.0);
        assert_eq!(p.velocity.y, 0.0);
        assert!(!p.jumping);
    }

    #[test]
    fn resting_on_floor_stays_put() {
        let mut p = player_at(20.0, 550.0);
        for _ in 0..10 {
            update_player(&mut p, &arena());
        }
        assert_eq!(p.position.y, 550.0);
        assert_eq!(p.velocity.y, 0.0);
    }

    #[test]
    fn attack_box_tracks_pre_move_position() {
        let mut p = player_at(20.0, 100.0);
        p.velocity.x = 5.0;
        update_player(&mut p, &arena());
        assert_eq!(p.attack_box.x, 20.0);
        assert_eq!(p.attack_box.y, 100.0);
        assert_eq!(p.position.x, 25.0);
    }

    #[test]
    fn lands_on_platform_from_above() {
        let a = arena();
        let mut p = player_at(250.0, 340.0);
        p.velocity.y = 5.0;
        p.jumping = true;
        update_player(&mut p, &a);
        assert_eq!(p.velocity.y, 5.5);
        resolve_platform_landing(&mut p, &a.platforms);
        assert_eq!(p.velocity.y, 0.0);
        assert!(!p.jumping);
    }

    #[test]
    fn no_landing_from_below() {
        let a = arena();
        let mut p = player_at(250.0, 425.0);
        p.velocity.y = -5.0;
        p.jumping = true;
        update_player(&mut p, &a);
        resolve_platform_landing(&mut p, &a.platforms);
        assert_eq!(p.velocity.y, -4.5);
        assert!(p.jumping);
    }

    #[test]
    fn no_landing_beside_platform() {
        let a = arena();
        // Left of the centre ledge and well below the upper ledges
        let mut p = player_at(140.0, 340.0);
        p.velocity.y = 5.0;
        p.jumping = true;
        update_player(&mut p, &a);
        resolve_platform_landing(&mut p, &a.platforms);
        assert_eq!(p.velocity.y, 5.5);
        assert!(p.jumping);
    }

    #[test]
    fn edge_touch_counts_as_overlap() {
        let plat = Platform { x: 200.0, y: 400.0, width: 400.0, height: 20.0 };
        // Right edge of the player exactly on the platform's left edge
        let mut p = player_at(150.0, 350.0);
        p.velocity.y = 1.0;
        assert!(is_landing(&p, &plat));
        p.position.x = 149.9;
        assert!(!is_landing(&p, &plat));
    }
}
