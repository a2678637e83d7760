//! Test collision between two circles.
use crate::*;

pub fn circle_circle_test(center1: &V2, r1: f64, center2: &V2, r2: f64) -> bool {
    let dist_squared = center1.distance_squared(center2);
    // Avoid square root, which is generally very slow.
    let touching_dist_squared = (r1 + r2).powi(2);
    dist_squared < touching_dist_squared
}
