use lyon_geom::{point, Angle, Point};
use rustc_hash::FxHashMap as HashMap;

/// Vertices spread evenly on a circle, the first one at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularLayout {
    pub center: Point<f64>,
    pub radius: f64,
}

impl CircularLayout {
    /// Centered on a `width` x `height` canvas with a radius of `radius_fraction` of the
    /// shorter side.
    pub fn for_canvas(width: f64, height: f64, radius_fraction: f64) -> Self {
        Self {
            center: point(width / 2., height / 2.),
            radius: width.min(height) * radius_fraction,
        }
    }

    /// Position of vertex `i` out of `n`.
    pub fn position(&self, i: usize, n: usize) -> Point<f64> {
        let angle = Angle::radians(std::f64::consts::TAU * i as f64 / n.max(1) as f64)
            - Angle::frac_pi_2();
        let (sin, cos) = angle.sin_cos();
        point(
            self.center.x + self.radius * cos,
            self.center.y + self.radius * sin,
        )
    }

    pub fn place<'a>(&self, vertices: &'a [String]) -> HashMap<&'a str, Point<f64>> {
        vertices
            .iter()
            .enumerate()
            .map(|(i, vertex)| (vertex.as_str(), self.position(i, vertices.len())))
            .collect()
    }
}
