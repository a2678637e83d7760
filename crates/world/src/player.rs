//! The player's collision surface and walking.
use swarm_physics::{aabb_aabb_test, circle_circle_test, Aabb, V2};

use crate::enemy::Enemy;

pub struct Player {
    pos: V2,
    size: f64,
    current_hp: i32,
    total_hp: i32,
}

impl Player {
    pub fn new(pos: V2, size: f64, total_hp: i32) -> Player {
        Player {
            pos,
            size,
            current_hp: total_hp,
            total_hp,
        }
    }

    pub fn position(&self) -> V2 {
        self.pos
    }

    pub fn hp(&self) -> i32 {
        self.current_hp
    }

    pub fn total_hp(&self) -> i32 {
        self.total_hp
    }

    /// Slightly smaller than the sprite, which makes collisions feel fairer.
    pub fn collision_radius(&self) -> f64 {
        self.size * 0.7
    }

    pub fn take_damage(&mut self, damage: f32) {
        self.current_hp -= damage as i32;
        if self.current_hp < 0 {
            self.current_hp = 0;
        }
    }

    pub fn overlaps_enemy(&self, enemy: &Enemy) -> bool {
        circle_circle_test(
            &self.pos,
            self.collision_radius(),
            &enemy.position(),
            enemy.body_radius(),
        )
    }

    /// Walk in `direction` (any magnitude; normalized here).  The whole move
    /// reverts if it lands in a block, and the final position clamps to the
    /// play area.
    pub fn walk(
        &mut self,
        direction: V2,
        dt: f64,
        speed: f64,
        blocks: &[Aabb],
        play_width: f64,
        play_height: f64,
    ) {
        if direction.length_squared() == 0.0 {
            return;
        }

        let old_pos = self.pos;
        self.pos += direction.normalize() * (dt * speed);

        let half = self.collision_radius();
        let rect = Aabb::from_center_and_dims(self.pos, half * 2.0, half * 2.0)
            .expect("Internal logic should never fail");
        if blocks.iter().any(|b| aabb_aabb_test(&rect, b)) {
            self.pos = old_pos;
        }

        self.pos.x = self.pos.x.clamp(half, play_width - half);
        self.pos.y = self.pos.y.clamp(half, play_height - half);
    }
}
