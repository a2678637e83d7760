//! Projectiles fly straight and never push anything around.
use swarm_physics::{Aabb, V2};

const PROJECTILE_SPEED: f64 = 400.0;

pub struct Projectile {
    pos: V2,
    dir: V2,
    size: f64,
    destroyed: bool,
}

impl Projectile {
    /// `toward` is a point to aim at, not a direction.
    pub fn new(initial_pos: V2, toward: V2, size: f64) -> Projectile {
        let offset = toward - initial_pos;
        let dir = if offset.length_squared() > 0.0 {
            offset.normalize()
        } else {
            V2::new(0.0, 0.0)
        };

        Projectile {
            pos: initial_pos,
            dir,
            size,
            destroyed: false,
        }
    }

    pub fn position(&self) -> V2 {
        self.pos
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn advance(&mut self, dt: f64) {
        self.pos += self.dir * (dt * PROJECTILE_SPEED);
    }

    /// The small rectangle used for block impact tests.
    pub fn bounding_rect(&self) -> Aabb {
        Aabb::from_center_and_dims(self.pos, self.size, self.size)
            .expect("Internal logic should never fail")
    }
}
