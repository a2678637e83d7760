//! The world: body list, grid, blocks, and the per-tick control flow.
use rand::Rng;

use swarm_physics::{aabb_aabb_test, circle_circle_test, Aabb, SpatialGrid, V2};

use crate::body::Body;
use crate::config::WorldConfig;
use crate::grenade::{GRENADE_BLAST_RADIUS, GRENADE_DAMAGE};

/// How far an enemy gets shoved when it lands a hit on the player.
const CONTACT_PUSH_DISTANCE: f64 = 10.0;

pub struct World {
    config: WorldConfig,
    grid: SpatialGrid,
    bodies: Vec<Body>,
    blocks: Vec<Aabb>,
}

impl World {
    pub fn new(config: WorldConfig) -> swarm_physics::Result<World> {
        let grid = SpatialGrid::new(
            config.play_width,
            config.play_height,
            config.grid_cols,
            config.grid_rows,
        )?;

        Ok(World {
            config,
            grid,
            bodies: vec![],
            blocks: vec![],
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn blocks(&self) -> &[Aabb] {
        &self.blocks
    }

    pub fn add_block(&mut self, block: Aabb) {
        self.blocks.push(block);
    }

    /// Add a body to the world, returning its index in the body list.
    pub fn spawn(&mut self, body: impl Into<Body>) -> usize {
        self.bodies.push(body.into());
        self.bodies.len() - 1
    }

    /// Whether a circular body of `radius` could be placed at `pos`: the
    /// spot must be outside every block and clear of every live enemy.
    pub fn placement_clear(&self, pos: V2, radius: f64) -> bool {
        let rect = Aabb::from_center_and_dims(pos, radius * 2.0, radius * 2.0)
            .expect("Internal logic should never fail");
        if self.blocks.iter().any(|b| aabb_aabb_test(&rect, b)) {
            return false;
        }

        self.bodies.iter().all(|body| match body {
            Body::Enemy(e) if !e.destroyed() => {
                !circle_circle_test(&pos, radius, &e.position(), e.body_radius())
            }
            _ => true,
        })
    }

    /// Resolve overlaps among the current bodies, rebuilding the grid before
    /// each scan, for at most the configured number of passes.
    pub fn resolve_overlaps(&mut self) {
        self.grid.rearrange_bodies(
            self.config.max_rearrange_iters,
            &mut self.bodies,
            |grid, bodies| grid.update_cells(bodies),
        );
    }

    /// One simulation tick, covering everything except input and spawning:
    /// motion, fuses, expiry, overlap resolution, impacts, contact damage,
    /// and the destroyed-body sweep.
    pub fn advance(&mut self, dt: f64, now: f64) {
        let blasts = self.step_motion(dt, now);
        self.apply_blasts(&blasts);
        self.mark_dead_enemies();
        self.chase_player(dt);
        self.resolve_overlaps();
        self.impact_projectiles();
        self.apply_enemy_contacts();
        self.bodies.retain(|b| !b.destroyed());
    }

    fn player_position(&self) -> Option<V2> {
        self.bodies.iter().find_map(|b| match b {
            Body::Player(p) => Some(p.position()),
            _ => None,
        })
    }

    /// Advance projectiles and fuses, expire pickups; collect blast centers
    /// of grenades that went off this tick.
    fn step_motion(&mut self, dt: f64, now: f64) -> Vec<V2> {
        let mut blasts = vec![];

        for body in self.bodies.iter_mut() {
            match body {
                Body::Projectile(p) => p.advance(dt),
                Body::Grenade(g) => {
                    if let Some(center) = g.update(now) {
                        blasts.push(center);
                    }
                }
                Body::WeaponLoot(l) => l.update(now),
                Body::AmmoLoot(l) => l.update(now),
                Body::GrenadePickup(p) => p.update(now),
                Body::Player(_) | Body::Enemy(_) => {}
            }
        }

        blasts
    }

    fn apply_blasts(&mut self, blasts: &[V2]) {
        for center in blasts {
            for body in self.bodies.iter_mut() {
                if let Body::Enemy(e) = body {
                    if e.position().distance(center) <= GRENADE_BLAST_RADIUS {
                        e.deal_damage(GRENADE_DAMAGE);
                    }
                }
            }
        }
    }

    fn mark_dead_enemies(&mut self) {
        for body in self.bodies.iter_mut() {
            if let Body::Enemy(e) = body {
                if e.health() <= 0.0 && !e.destroyed() {
                    e.destroy();
                }
            }
        }
    }

    fn chase_player(&mut self, dt: f64) {
        let target = match self.player_position() {
            Some(x) => x,
            None => return,
        };

        let speed = self.config.enemy_speed;
        let blocks = self.blocks.as_slice();
        for body in self.bodies.iter_mut() {
            if let Body::Enemy(e) = body {
                if !e.destroyed() {
                    e.chase(target, dt, speed, blocks);
                }
            }
        }
    }

    /// Projectiles stop at the first block they hit.
    fn impact_projectiles(&mut self) {
        let blocks = self.blocks.as_slice();
        for body in self.bodies.iter_mut() {
            if let Body::Projectile(p) = body {
                if !p.destroyed() && blocks.iter().any(|b| aabb_aabb_test(&p.bounding_rect(), b)) {
                    p.destroy();
                }
            }
        }
    }

    /// Every enemy touching the player deals its damage and gets shoved back
    /// a little, a cheap invulnerability-frame substitute.
    fn apply_enemy_contacts(&mut self) {
        let (player_pos, player_radius) = match self.bodies.iter().find_map(|b| match b {
            Body::Player(p) => Some((p.position(), p.collision_radius())),
            _ => None,
        }) {
            Some(x) => x,
            None => return,
        };

        let mut rng = rand::thread_rng();
        let mut total_damage = 0.0f32;

        for body in self.bodies.iter_mut() {
            if let Body::Enemy(e) = body {
                if e.destroyed() {
                    continue;
                }
                if !circle_circle_test(&player_pos, player_radius, &e.position(), e.body_radius())
                {
                    continue;
                }

                total_damage += e.damage();

                let mut dir = e.position() - player_pos;
                if dir.x == 0.0 && dir.y == 0.0 {
                    dir = V2::new(
                        rng.gen_range(-10i32..=10) as f64 * 0.1,
                        rng.gen_range(-10i32..=10) as f64 * 0.1,
                    );
                }
                let dir = if dir.length_squared() > 0.0 {
                    dir.normalize()
                } else {
                    V2::new(1.0, 0.0)
                };

                e.set_position(e.position() + dir * CONTACT_PUSH_DISTANCE);
            }
        }

        if total_damage > 0.0 {
            for body in self.bodies.iter_mut() {
                if let Body::Player(p) = body {
                    p.take_damage(total_damage);
                    break;
                }
            }
        }
    }
}
