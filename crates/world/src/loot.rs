//! Weapon and ammo pickups.
use swarm_physics::V2;

/// Pickups vanish if nobody grabs them within this window.
const LOOT_TIMEOUT_SECS: f64 = 10.0;

/// Which weapon a [WeaponLoot] grants.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WeaponKind {
    Pistol,
    Mitra,
    Shotgun,
    Minigun,
}

pub struct WeaponLoot {
    kind: WeaponKind,
    pos: V2,
    create_time: f64,
    destroyed: bool,
}

impl WeaponLoot {
    pub fn new(kind: WeaponKind, pos: V2, now: f64) -> WeaponLoot {
        WeaponLoot {
            kind,
            pos,
            create_time: now,
            destroyed: false,
        }
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn position(&self) -> V2 {
        self.pos
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark the loot as collected.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn update(&mut self, now: f64) {
        if now - self.create_time > LOOT_TIMEOUT_SECS {
            self.destroyed = true;
        }
    }
}

pub struct AmmoLoot {
    amount: i32,
    pos: V2,
    create_time: f64,
    destroyed: bool,
}

impl AmmoLoot {
    pub fn new(amount: i32, pos: V2, now: f64) -> AmmoLoot {
        AmmoLoot {
            amount,
            pos,
            create_time: now,
            destroyed: false,
        }
    }

    /// How many rounds this pickup grants.
    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn position(&self) -> V2 {
        self.pos
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    /// Mark the loot as collected.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn update(&mut self, now: f64) {
        if now - self.create_time > LOOT_TIMEOUT_SECS {
            self.destroyed = true;
        }
    }
}
