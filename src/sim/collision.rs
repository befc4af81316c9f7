//! Collision tests between the player and world entities
//!
//! Everything is checked in screen x (entity world x minus scroll) against
//! the player's fixed screen position. y is y-down.

use super::state::{Obstacle, Pickup, Player};
use crate::tuning::Tuning;

/// y of the point that must clear obstacle tops
///
/// Airborne players get `airborne_clearance` of extra tolerance.
#[inline]
pub fn hit_line(player: &Player, tuning: &Tuning) -> f64 {
    let clearance = if player.on_ground {
        0.0
    } else {
        tuning.player.airborne_clearance
    };
    player.y - tuning.player.head_offset - clearance
}

/// Whether an obstacle is close enough horizontally to be tested
///
/// The window is asymmetric: it reaches further ahead of the player than
/// behind.
#[inline]
pub fn obstacle_in_window(
    player: &Player,
    obstacle: &Obstacle,
    scroll_x: f64,
    tuning: &Tuning,
) -> bool {
    let x = obstacle.x - scroll_x;
    x >= player.screen_x - tuning.collision.window_behind
        && x <= player.screen_x + tuning.collision.window_ahead
}

/// Whether the player runs into an obstacle
pub fn obstacle_hit(player: &Player, obstacle: &Obstacle, scroll_x: f64, tuning: &Tuning) -> bool {
    obstacle_in_window(player, obstacle, scroll_x, tuning)
        && hit_line(player, tuning) >= obstacle.top()
}

/// Whether an untaken pickup is within grabbing distance
pub fn pickup_in_reach(player: &Player, pickup: &Pickup, scroll_x: f64, tuning: &Tuning) -> bool {
    if pickup.taken {
        return false;
    }
    let c = &tuning.collision;
    let dx = (pickup.x - scroll_x - player.screen_x).abs();
    let dy = (pickup.y - (player.y - c.pickup_head_offset)).abs();
    dx < c.pickup_dx && dy < c.pickup_dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{ObstacleKind, PickupKind};

    fn player_at(y: f64, on_ground: bool) -> Player {
        Player {
            screen_x: 90.0,
            y,
            vy: 0.0,
            on_ground,
            jump_power: 340.0,
            crash_flash: 0.0,
        }
    }

    fn tree(x: f64, y: f64, height: f64) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Tree,
            x,
            y,
            width: 20.0,
            height,
        }
    }

    #[test]
    fn test_window_is_asymmetric() {
        let tuning = Tuning::default();
        let player = player_at(150.0, true);
        let scroll = 1000.0;

        let at = |dx: f64| tree(scroll + 90.0 + dx, 150.0, 40.0);

        assert!(obstacle_in_window(&player, &at(-10.0), scroll, &tuning));
        assert!(obstacle_in_window(&player, &at(24.0), scroll, &tuning));
        assert!(!obstacle_in_window(&player, &at(-10.5), scroll, &tuning));
        assert!(!obstacle_in_window(&player, &at(24.5), scroll, &tuning));
    }

    #[test]
    fn test_grounded_player_hits_tall_obstacle() {
        let tuning = Tuning::default();
        let player = player_at(150.0, true);
        assert!(obstacle_hit(&player, &tree(95.0, 150.0, 40.0), 0.0, &tuning));
    }

    #[test]
    fn test_grounded_player_passes_low_rock() {
        let tuning = Tuning::default();
        let player = player_at(150.0, true);
        let rock = Obstacle {
            kind: ObstacleKind::Rock,
            x: 95.0,
            y: 150.0,
            width: 20.0,
            height: 12.0,
        };
        assert!(!obstacle_hit(&player, &rock, 0.0, &tuning));
    }

    #[test]
    fn test_airborne_clearance_allows_partial_pass_over() {
        let tuning = Tuning::default();
        let obstacle = tree(95.0, 150.0, 40.0);
        // Raw hit point 6 units below the top edge
        let y = obstacle.top() + 6.0 + 16.0;

        assert!(!obstacle_hit(&player_at(y, false), &obstacle, 0.0, &tuning));
        assert!(obstacle_hit(&player_at(y, true), &obstacle, 0.0, &tuning));
    }

    #[test]
    fn test_touching_the_top_counts_as_hit() {
        let tuning = Tuning::default();
        let obstacle = tree(95.0, 150.0, 40.0);
        let player = player_at(obstacle.top() + 16.0, true);
        assert!(obstacle_hit(&player, &obstacle, 0.0, &tuning));
    }

    #[test]
    fn test_pickup_reach() {
        let tuning = Tuning::default();
        let player = player_at(150.0, true);
        let mut flag = Pickup {
            kind: PickupKind::Flag,
            x: 500.0 + 90.0 + 10.0,
            y: 150.0 - 18.0 - 10.0,
            taken: false,
            bob: 0.0,
        };
        assert!(pickup_in_reach(&player, &flag, 500.0, &tuning));
        // Airborne players reach with the same window
        assert!(pickup_in_reach(&player_at(150.0, false), &flag, 500.0, &tuning));

        flag.taken = true;
        assert!(!pickup_in_reach(&player, &flag, 500.0, &tuning));

        flag.taken = false;
        flag.x += 10.0;
        assert!(!pickup_in_reach(&player, &flag, 500.0, &tuning));
    }
}
