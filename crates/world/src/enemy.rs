//! The swarming enemy and its separation response.
use rand::Rng;

use swarm_physics::{aabb_aabb_test, circle_circle_test, Aabb, V2};

/// Fraction of the measured overlap applied per separation, so tightly
/// packed groups don't snap apart in a single pass.
const SEPARATION_DAMPING: f64 = 0.5;

/// Per-axis magnitude of the random jitter mixed into each separation.
const SEPARATION_JITTER: f64 = 0.1;

pub struct Enemy {
    pos: V2,
    body_radius: f64,
    health: f32,
    max_health: f32,
    damage: f32,
    destroyed: bool,
}

impl Enemy {
    pub fn new(pos: V2, max_health: f32, damage: f32, body_radius: f64) -> Enemy {
        Enemy {
            pos,
            body_radius,
            damage,
            health: max_health,
            max_health,
            destroyed: false,
        }
    }

    pub fn position(&self) -> V2 {
        self.pos
    }

    pub fn set_position(&mut self, pos: V2) {
        self.pos = pos;
    }

    pub fn body_radius(&self) -> f64 {
        self.body_radius
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn damage(&self) -> f32 {
        self.damage
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn deal_damage(&mut self, dmg: f32) {
        self.health -= dmg;
    }

    /// Home toward `target` at `speed`, sliding along any block in the way.
    pub fn chase(&mut self, target: V2, dt: f64, speed: f64, blocks: &[Aabb]) {
        let offset = target - self.pos;
        if offset.length_squared() == 0.0 {
            return;
        }
        let step = offset.normalize() * (dt * speed);

        // Try the full move, then each axis alone, so a blocked enemy slides
        // along the wall instead of sticking to it.
        for candidate in [
            self.pos + step,
            self.pos + V2::new(step.x, 0.0),
            self.pos + V2::new(0.0, step.y),
        ] {
            if !self.hits_any_block(candidate, blocks) {
                self.pos = candidate;
                return;
            }
        }
    }

    fn hits_any_block(&self, pos: V2, blocks: &[Aabb]) -> bool {
        let rect =
            Aabb::from_center_and_dims(pos, self.body_radius * 2.0, self.body_radius * 2.0)
                .expect("Internal logic should never fail");
        blocks.iter().any(|b| aabb_aabb_test(&rect, b))
    }

    pub fn overlaps(&self, other: &Enemy) -> bool {
        circle_circle_test(&self.pos, self.body_radius, &other.pos, other.body_radius)
    }

    /// Push two overlapping enemies apart, each by half the damped overlap
    /// along the separation axis, plus a little jitter.
    ///
    /// The overlap gets re-measured here instead of trusting the grid scan:
    /// earlier pairs in the same pass may have moved either body already.
    /// Exactly stacked bodies have no separation axis, so the jitter picks
    /// the direction in that case.
    pub fn separate_from(&mut self, other: &mut Enemy) {
        let desired = self.body_radius + other.body_radius;
        let offset = other.pos - self.pos;
        let dist = offset.length();

        if dist >= desired {
            return;
        }

        let mut rng = rand::thread_rng();
        let jitter = V2::new(
            rng.gen_range(-SEPARATION_JITTER..=SEPARATION_JITTER),
            rng.gen_range(-SEPARATION_JITTER..=SEPARATION_JITTER),
        );

        let dir = if dist > 0.0 {
            offset / dist
        } else if jitter.length_squared() > 0.0 {
            jitter.normalize()
        } else {
            V2::new(1.0, 0.0)
        };

        let push = (desired - dist) * SEPARATION_DAMPING * 0.5;
        self.pos -= dir * push + jitter;
        other.pos += dir * push + jitter;
    }
}
