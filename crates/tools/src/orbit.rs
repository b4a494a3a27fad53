use formats::{ModelKind, TripPoint, TripRecord};
use foundation::math::Vec2;

use crate::palette::{PaletteCursor, PaletteExhausted};

/// A decorative orbit traced around the data center.
///
/// Angles run over the half-open integer range `start_deg, start_deg + step_deg, ...`
/// stopping before `stop_deg`; a negative step counts down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitSpec {
    pub name: &'static str,
    pub flag: &'static str,
    /// Semi-axes in degrees, `[x, y]`.
    pub radius: [f64; 2],
    pub start_deg: i32,
    pub stop_deg: i32,
    pub step_deg: i32,
    /// Added to the angle to form the point's `t` channel.
    pub t_offset: i64,
    pub model: ModelKind,
}

pub const DEFAULT_ORBITS: [OrbitSpec; 2] = [
    OrbitSpec {
        name: "Ukraine",
        flag: "ua",
        radius: [0.005, 0.005],
        start_deg: 270,
        stop_deg: -90,
        step_deg: -1,
        t_offset: 90,
        model: ModelKind::Airplane,
    },
    OrbitSpec {
        name: "Japan",
        flag: "jp",
        radius: [0.006, 0.007],
        start_deg: -90,
        stop_deg: 270,
        step_deg: 72,
        t_offset: 360,
        model: ModelKind::Airplane,
    },
];

impl OrbitSpec {
    pub fn angles(&self) -> impl Iterator<Item = i32> + '_ {
        let step = self.step_deg;
        let stop = self.stop_deg;
        std::iter::successors(Some(self.start_deg), move |a| a.checked_add(step))
            .take_while(move |&a| match step {
                s if s > 0 => a < stop,
                s if s < 0 => a > stop,
                _ => false,
            })
    }

    pub fn trace(&self, center: Vec2) -> Vec<TripPoint> {
        self.angles()
            .map(|deg| {
                let rad = f64::from(deg).to_radians();
                TripPoint(
                    center.x + self.radius[0] * rad.cos(),
                    center.y + self.radius[1] * rad.sin(),
                    i64::from(deg) + self.t_offset,
                )
            })
            .collect()
    }
}

/// Builds one record per orbit, drawing colors from `cursor` in order.
pub fn synthesize_orbits(
    center: Vec2,
    orbits: &[OrbitSpec],
    cursor: &mut PaletteCursor<'_>,
) -> Result<Vec<TripRecord>, PaletteExhausted> {
    orbits
        .iter()
        .map(|orbit| {
            Ok(TripRecord {
                name: orbit.name.to_string(),
                flag: orbit.flag.to_string(),
                coords: orbit.trace(center),
                color: cursor.next_color()?,
                model: orbit.model,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ORBITS, synthesize_orbits};
    use crate::palette::PaletteCursor;
    use formats::ModelKind;
    use foundation::math::Vec2;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn default_orbit_sample_counts() {
        let [ring, star] = DEFAULT_ORBITS;
        let ring_angles: Vec<i32> = ring.angles().collect();
        assert_eq!(ring_angles.len(), 360);
        assert_eq!(ring_angles.first(), Some(&270));
        assert_eq!(ring_angles.last(), Some(&-89));

        let star_angles: Vec<i32> = star.angles().collect();
        assert_eq!(star_angles, vec![-90, -18, 54, 126, 198]);
    }

    #[test]
    fn zero_step_yields_nothing() {
        let mut orbit = DEFAULT_ORBITS[0];
        orbit.step_deg = 0;
        assert_eq!(orbit.angles().count(), 0);
    }

    #[test]
    fn ring_points_sit_on_radius() {
        let center = Vec2::new(1.5, 1.5);
        let ring = DEFAULT_ORBITS[0];
        for (p, deg) in ring.trace(center).iter().zip(ring.angles()) {
            let d = Vec2::new(p.0, p.1).distance(center);
            assert_close(d, 0.005, 1e-12);
            assert_eq!(p.t(), i64::from(deg) + 90);
        }
    }

    #[test]
    fn ellipse_points_satisfy_axes() {
        let center = Vec2::new(-95.36, 29.75);
        let star = DEFAULT_ORBITS[1];
        let pts = star.trace(center);
        for p in &pts {
            let u = (p.0 - center.x) / star.radius[0];
            let v = (p.1 - center.y) / star.radius[1];
            assert_close(u * u + v * v, 1.0, 1e-9);
        }
        // First sample points straight down from the center.
        assert_close(pts[0].0, center.x, 1e-12);
        assert_close(pts[0].1, center.y - 0.007, 1e-12);
        assert_eq!(pts[0].t(), 270);
    }

    #[test]
    fn orbits_take_next_palette_colors() {
        let palette = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let mut cursor = PaletteCursor::new(&palette);
        cursor.next_color().unwrap();

        let recs = synthesize_orbits(Vec2::new(0.0, 0.0), &DEFAULT_ORBITS, &mut cursor).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].name, "Ukraine");
        assert_eq!(recs[0].flag, "ua");
        assert_eq!(recs[0].color, [255, 0, 0, 192]);
        assert_eq!(recs[1].name, "Japan");
        assert_eq!(recs[1].color, [0, 255, 0, 192]);
        assert!(recs.iter().all(|r| r.model == ModelKind::Airplane));
    }

    #[test]
    fn orbits_fail_when_palette_runs_out() {
        let palette = [[0.0, 0.0, 0.0]];
        let mut cursor = PaletteCursor::new(&palette);
        assert!(synthesize_orbits(Vec2::new(0.0, 0.0), &DEFAULT_ORBITS, &mut cursor).is_err());
    }
}
