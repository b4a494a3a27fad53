use crate::math::Vec2;

/// Axis-aligned bounding box in lon/lat degrees.
///
/// An empty box has `min > max`; extending it with the first point collapses
/// it onto that point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb2 {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Aabb2 {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Aabb2 { min, max }
    }

    pub fn empty() -> Self {
        Aabb2 {
            min: [f64::INFINITY; 2],
            max: [f64::NEG_INFINITY; 2],
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a [f64; 2]>) -> Self {
        let mut out = Self::empty();
        for p in points {
            out.extend(*p);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1]
    }

    pub fn extend(&mut self, p: [f64; 2]) {
        self.min[0] = self.min[0].min(p[0]);
        self.min[1] = self.min[1].min(p[1]);
        self.max[0] = self.max[0].max(p[0]);
        self.max[1] = self.max[1].max(p[1]);
    }

    /// Element-wise min/max fold. Empty boxes are the identity.
    pub fn union(&self, other: &Aabb2) -> Aabb2 {
        Aabb2 {
            min: [self.min[0].min(other.min[0]), self.min[1].min(other.min[1])],
            max: [self.max[0].max(other.max[0]), self.max[1].max(other.max[1])],
        }
    }

    pub fn center(&self) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        Some(self.midpoint())
    }

    /// `min + (max - min) / 2` per axis, also for inverted boxes.
    pub fn midpoint(&self) -> Vec2 {
        Vec2::new(
            self.min[0] + (self.max[0] - self.min[0]) / 2.0,
            self.min[1] + (self.max[1] - self.min[1]) / 2.0,
        )
    }

    /// `[min_x, min_y, max_x, max_y]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.min[0], self.min[1], self.max[0], self.max[1]]
    }
}

impl Default for Aabb2 {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Aabb2;

    #[test]
    fn empty_box_has_no_center() {
        let b = Aabb2::empty();
        assert!(b.is_empty());
        assert!(b.center().is_none());
    }

    #[test]
    fn from_points_tracks_extremes() {
        let pts = [[0.0, 5.0], [-3.0, 1.0], [2.0, -4.0]];
        let b = Aabb2::from_points(&pts);
        assert_eq!(b.to_array(), [-3.0, -4.0, 2.0, 5.0]);
    }

    #[test]
    fn union_with_empty_is_identity() {
        let b = Aabb2::new([1.0, 2.0], [3.0, 4.0]);
        assert_eq!(b.union(&Aabb2::empty()), b);
        assert_eq!(Aabb2::empty().union(&b), b);
    }

    #[test]
    fn center_is_midpoint() {
        let b = Aabb2::from_points(&[[0.0, 0.0], [1.0, 1.0]])
            .union(&Aabb2::from_points(&[[2.0, 2.0], [3.0, 3.0]]));
        let c = b.center().unwrap();
        assert_eq!((c.x, c.y), (1.5, 1.5));
    }

    #[test]
    fn inverted_world_box_midpoint_is_origin() {
        let b = Aabb2::new([180.0, 90.0], [-180.0, -90.0]);
        assert!(b.center().is_none());
        let m = b.midpoint();
        assert_eq!((m.x, m.y), (0.0, 0.0));
    }
}
