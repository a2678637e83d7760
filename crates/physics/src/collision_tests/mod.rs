mod aabb_aabb;
mod circle_circle;

pub use aabb_aabb::*;
pub use circle_circle::*;
