//! Grenades and the pickups that grant them.
use swarm_physics::V2;

/// Seconds between placement and detonation.
const GRENADE_FUSE_SECS: f64 = 2.0;

/// How long the spent grenade lingers before it is swept.
const GRENADE_LINGER_SECS: f64 = 0.5;

pub const GRENADE_BLAST_RADIUS: f64 = 150.0;
pub const GRENADE_DAMAGE: f32 = 200.0;

/// Grenade pickups vanish if nobody grabs them within this window.
const PICKUP_TIMEOUT_SECS: f64 = 10.0;

pub struct Grenade {
    pos: V2,
    explosion_time: f64,
    has_exploded: bool,
    destroyed: bool,
}

impl Grenade {
    pub fn new(pos: V2, now: f64) -> Grenade {
        Grenade {
            pos,
            explosion_time: now + GRENADE_FUSE_SECS,
            has_exploded: false,
            destroyed: false,
        }
    }

    pub fn position(&self) -> V2 {
        self.pos
    }

    pub fn has_exploded(&self) -> bool {
        self.has_exploded
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Advance the fuse.  Returns the blast center on the tick the grenade
    /// goes off; applying the damage is the caller's job.
    pub fn update(&mut self, now: f64) -> Option<V2> {
        if !self.has_exploded && now >= self.explosion_time {
            self.has_exploded = true;
            // The timer is reused for the linger window.
            self.explosion_time = now + GRENADE_LINGER_SECS;
            return Some(self.pos);
        }

        if self.has_exploded && now > self.explosion_time {
            self.destroyed = true;
        }

        None
    }
}

pub struct GrenadePickup {
    pos: V2,
    amount: i32,
    create_time: f64,
    destroyed: bool,
}

impl GrenadePickup {
    pub fn new(pos: V2, amount: i32, now: f64) -> GrenadePickup {
        GrenadePickup {
            pos,
            amount,
            create_time: now,
            destroyed: false,
        }
    }

    pub fn position(&self) -> V2 {
        self.pos
    }

    /// How many grenades this pickup grants.
    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark the pickup as collected.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn update(&mut self, now: f64) {
        if now - self.create_time > PICKUP_TIMEOUT_SECS {
            self.destroyed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuse_then_linger_then_destroyed() {
        let mut g = Grenade::new(V2::new(50.0, 50.0), 1.0);

        assert_eq!(g.update(2.9), None);
        assert!(!g.has_exploded());

        assert_eq!(g.update(3.0), Some(V2::new(50.0, 50.0)));
        assert!(g.has_exploded());
        assert!(!g.destroyed());

        // Only blasts once.
        assert_eq!(g.update(3.2), None);
        assert!(!g.destroyed());

        assert_eq!(g.update(3.6), None);
        assert!(g.destroyed());
    }

    #[test]
    fn pickups_expire() {
        let mut p = GrenadePickup::new(V2::new(10.0, 10.0), 2, 5.0);
        p.update(14.9);
        assert!(!p.destroyed());
        p.update(15.1);
        assert!(p.destroyed());
        assert_eq!(p.amount(), 2);
    }
}
