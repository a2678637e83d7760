//! An axis-aligned bounding box.
use crate::errors::AabbError;
use crate::*;

/// An axis-aligned bounding box is specified by 2 points `p1` and `p2`, such
/// that `p1.x <= p2.x && p1.y <= p2.y`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Aabb {
    p1: V2,
    p2: V2,
}

impl Aabb {
    pub fn from_points(p1: V2, p2: V2) -> Result<Aabb, AabbError> {
        if p1.x > p2.x || p1.y > p2.y {
            return Err(AabbError::AabbInvalidDims);
        }

        Ok(Aabb { p1, p2 })
    }

    /// Build a box from its center and full dimensions.  This is how entity
    /// bounding rectangles get made, so the dimensions must be nonnegative.
    pub fn from_center_and_dims(center: V2, width: f64, height: f64) -> Result<Aabb, AabbError> {
        let half_dims = V2::new(width / 2.0, height / 2.0);
        Aabb::from_points(center - half_dims, center + half_dims)
    }

    pub fn get_p1(&self) -> &V2 {
        &self.p1
    }

    pub fn get_p2(&self) -> &V2 {
        &self.p2
    }

    pub fn get_width(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    pub fn get_height(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    pub fn get_half_width(&self) -> f64 {
        self.get_width() / 2.0
    }

    pub fn get_half_height(&self) -> f64 {
        self.get_height() / 2.0
    }

    pub fn get_center(&self) -> V2 {
        V2 {
            x: self.p1.x + self.get_half_width(),
            y: self.p1.y + self.get_half_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() -> anyhow::Result<()> {
        let b = Aabb::from_points(V2::new(1.0, 1.0), V2::new(3.0, 5.0))?;
        approx::assert_relative_eq!(b.get_width(), 2.0);
        approx::assert_relative_eq!(b.get_height(), 4.0);
        approx::assert_relative_eq!(b.get_half_width(), 1.0);
        approx::assert_relative_eq!(b.get_half_height(), 2.0);
        Ok(())
    }

    #[test]
    fn test_from_center() -> anyhow::Result<()> {
        let b = Aabb::from_center_and_dims(V2::new(10.0, 20.0), 4.0, 6.0)?;
        approx::assert_relative_eq!(b.get_p1().x, 8.0);
        approx::assert_relative_eq!(b.get_p1().y, 17.0);
        approx::assert_relative_eq!(b.get_p2().x, 12.0);
        approx::assert_relative_eq!(b.get_p2().y, 23.0);
        assert_eq!(b.get_center(), V2::new(10.0, 20.0));
        Ok(())
    }

    #[test]
    fn test_inverted_points_rejected() {
        assert!(Aabb::from_points(V2::new(2.0, 0.0), V2::new(1.0, 1.0)).is_err());
        assert!(Aabb::from_points(V2::new(0.0, 2.0), V2::new(1.0, 1.0)).is_err());
    }
}
