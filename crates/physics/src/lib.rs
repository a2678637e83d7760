//! A crate for physics related modules.

mod aabb;
mod collision_tests;
mod errors;
mod grid;
mod rearrange;
mod v2;

pub use aabb::*;
pub use collision_tests::*;
pub use errors::*;
pub use grid::*;
pub use rearrange::*;
pub use v2::*;
