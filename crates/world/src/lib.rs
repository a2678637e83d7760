//! Concrete bodies for the collision core: the player, the enemy swarm, and
//! the pickups and projectiles that share the grid with them, plus the world
//! that ties them to the overlap resolver.

mod body;
mod config;
mod enemy;
mod grenade;
mod loot;
mod player;
mod projectile;
mod world;

pub use body::*;
pub use config::*;
pub use enemy::*;
pub use grenade::*;
pub use loot::*;
pub use player::*;
pub use projectile::*;
pub use world::*;
