//! The closed set of world bodies and their pairwise collision policy.
use swarm_physics::{Collides, V2};

use crate::enemy::Enemy;
use crate::grenade::{Grenade, GrenadePickup};
use crate::loot::{AmmoLoot, WeaponLoot};
use crate::player::Player;
use crate::projectile::Projectile;

/// Any entity participating in spatial collision queries.
///
/// Each variant owns its own geometry and response; the enum only routes the
/// pairwise policy to the right pair of variants.
pub enum Body {
    Player(Player),
    Enemy(Enemy),
    WeaponLoot(WeaponLoot),
    AmmoLoot(AmmoLoot),
    GrenadePickup(GrenadePickup),
    Grenade(Grenade),
    Projectile(Projectile),
}

impl Body {
    pub fn destroyed(&self) -> bool {
        match self {
            Body::Player(_) => false,
            Body::Enemy(e) => e.destroyed(),
            Body::WeaponLoot(l) => l.destroyed(),
            Body::AmmoLoot(l) => l.destroyed(),
            Body::GrenadePickup(p) => p.destroyed(),
            Body::Grenade(g) => g.destroyed(),
            Body::Projectile(p) => p.destroyed(),
        }
    }
}

impl Collides for Body {
    fn position(&self) -> V2 {
        match self {
            Body::Player(p) => p.position(),
            Body::Enemy(e) => e.position(),
            Body::WeaponLoot(l) => l.position(),
            Body::AmmoLoot(l) => l.position(),
            Body::GrenadePickup(p) => p.position(),
            Body::Grenade(g) => g.position(),
            Body::Projectile(p) => p.position(),
        }
    }

    fn check_collision(&self, other: &Body) -> bool {
        match (self, other) {
            (Body::Enemy(a), Body::Enemy(b)) => a.overlaps(b),
            (Body::Player(p), Body::Enemy(e)) => p.overlaps_enemy(e),
            // Pickups, grenades, and projectiles never collide with anything;
            // they ride the body list only to occupy grid cells.
            _ => false,
        }
    }

    fn rearrange(&mut self, other: &mut Body) {
        if let (Body::Enemy(a), Body::Enemy(b)) = (self, other) {
            a.separate_from(b);
        }
        // The player never gets displaced here; enemy contact resolves
        // through the world's contact pass instead.
    }
}

impl From<Player> for Body {
    fn from(other: Player) -> Body {
        Body::Player(other)
    }
}

impl From<Enemy> for Body {
    fn from(other: Enemy) -> Body {
        Body::Enemy(other)
    }
}

impl From<WeaponLoot> for Body {
    fn from(other: WeaponLoot) -> Body {
        Body::WeaponLoot(other)
    }
}

impl From<AmmoLoot> for Body {
    fn from(other: AmmoLoot) -> Body {
        Body::AmmoLoot(other)
    }
}

impl From<GrenadePickup> for Body {
    fn from(other: GrenadePickup) -> Body {
        Body::GrenadePickup(other)
    }
}

impl From<Grenade> for Body {
    fn from(other: Grenade) -> Body {
        Body::Grenade(other)
    }
}

impl From<Projectile> for Body {
    fn from(other: Projectile) -> Body {
        Body::Projectile(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::loot::WeaponKind;

    #[test]
    fn only_enemy_pairs_and_player_on_enemy_collide() {
        let at = V2::new(100.0, 100.0);
        let player: Body = Player::new(at, 20.0, 100).into();
        let enemy_a: Body = Enemy::new(at, 100.0, 10.0, 10.0).into();
        let enemy_b: Body = Enemy::new(at, 100.0, 10.0, 10.0).into();
        let loot: Body = WeaponLoot::new(WeaponKind::Pistol, at, 0.0).into();
        let grenade: Body = Grenade::new(at, 0.0).into();
        let projectile: Body = Projectile::new(at, V2::new(0.0, 0.0), 5.0).into();

        assert!(enemy_a.check_collision(&enemy_b));
        assert!(player.check_collision(&enemy_a));

        // The enemy side of the player pair is deliberately one-way.
        assert!(!enemy_a.check_collision(&player));

        // No-op variants answer false even when exactly stacked.
        for passive in [&loot, &grenade, &projectile] {
            assert!(!passive.check_collision(&enemy_a));
            assert!(!enemy_a.check_collision(passive));
            assert!(!passive.check_collision(&player));
        }
    }

    #[test]
    fn rearrange_moves_enemy_pairs_only() {
        let mut player: Body = Player::new(V2::new(100.0, 100.0), 20.0, 100).into();
        let mut enemy: Body = Enemy::new(V2::new(104.0, 100.0), 100.0, 10.0, 10.0).into();

        player.rearrange(&mut enemy);
        assert_eq!(player.position(), V2::new(100.0, 100.0));
        assert_eq!(enemy.position(), V2::new(104.0, 100.0));

        let mut other: Body = Enemy::new(V2::new(108.0, 100.0), 100.0, 10.0, 10.0).into();
        enemy.rearrange(&mut other);
        assert!(enemy.position().distance(&other.position()) > 4.0);
    }
}
