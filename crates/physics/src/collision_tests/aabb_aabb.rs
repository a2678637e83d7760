//! The AABB-AABB collision test.
use crate::*;

pub fn aabb_aabb_test(box1: &Aabb, box2: &Aabb) -> bool {
    box1.get_p1().x < box2.get_p2().x
        && box2.get_p1().x < box1.get_p2().x
        && box1.get_p1().y < box2.get_p2().y
        && box2.get_p1().y < box1.get_p2().y
}
