//! Geometry helpers for the vehicle animation.

use crate::models::Coord;

/// Initial great-circle bearing from `a` to `b`, degrees in [0, 360).
/// The vehicle icon rotates to this heading while moving along a segment.
pub fn bearing(a: Coord, b: Coord) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let y = dlng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// One tick of the vehicle animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    pub position: Coord,
    /// Heading toward the next path point, degrees.
    pub bearing: f64,
}

/// Walks a route path one point per tick. The interval driver calls
/// [`advance`](AnimationPath::advance) until it returns `None`, idles for
/// a pause, then calls [`restart`](AnimationPath::restart).
#[derive(Debug, Clone)]
pub struct AnimationPath {
    points: Vec<Coord>,
    cursor: usize,
}

impl AnimationPath {
    /// Returns `None` for paths too short to animate.
    pub fn new(points: &[Coord]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self {
            points: points.to_vec(),
            cursor: 0,
        })
    }

    /// The next position and heading, or `None` once the path is exhausted.
    /// The final point keeps the heading of the last segment.
    pub fn advance(&mut self) -> Option<AnimationStep> {
        let position = *self.points.get(self.cursor)?;
        let bearing_to = if self.cursor + 1 < self.points.len() {
            bearing(position, self.points[self.cursor + 1])
        } else {
            bearing(self.points[self.cursor - 1], position)
        };
        self.cursor += 1;
        Some(AnimationStep {
            position,
            bearing: bearing_to,
        })
    }

    /// Rewinds to the first point for the next loop.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Coord::new(0.0, 0.0);
        assert!((bearing(origin, Coord::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((bearing(origin, Coord::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((bearing(origin, Coord::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing(origin, Coord::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn short_paths_do_not_animate() {
        assert!(AnimationPath::new(&[]).is_none());
        assert!(AnimationPath::new(&[Coord::new(-12.0, -77.0)]).is_none());
    }

    #[test]
    fn path_walks_every_point_then_restarts() {
        let points = [
            Coord::new(-12.0464, -77.0428),
            Coord::new(-12.0560, -77.0360),
            Coord::new(-12.0620, -77.0300),
        ];
        let mut path = AnimationPath::new(&points).unwrap();

        let mut visited = Vec::new();
        while let Some(step) = path.advance() {
            visited.push(step.position);
        }
        assert_eq!(visited, points);
        assert!(path.advance().is_none());

        path.restart();
        assert_eq!(path.advance().unwrap().position, points[0]);
    }

    #[test]
    fn last_step_keeps_the_final_segment_heading() {
        let points = [Coord::new(0.0, 0.0), Coord::new(0.0, 1.0)];
        let mut path = AnimationPath::new(&points).unwrap();
        let first = path.advance().unwrap();
        let last = path.advance().unwrap();
        assert!((first.bearing - 90.0).abs() < 1e-9);
        assert!((last.bearing - 90.0).abs() < 1e-9);
    }
}
