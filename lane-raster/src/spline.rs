//! Annotation-line parsing and Catmull-Rom spline sampling.

use crate::error::{RasterError, Result};

/// A spline control point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Parse one annotation line into spline control points.
///
/// The line is a whitespace-separated sequence of alternating `x y`
/// coordinates. An empty line yields no points.
pub fn parse_control_points(line: &str) -> Result<Vec<Point>> {
    let coords: Vec<f64> = line
        .split_whitespace()
        .map(|text| {
            text.parse()
                .map_err(|source| RasterError::InvalidCoordinate {
                    text: text.to_owned(),
                    source,
                })
        })
        .collect::<Result<_>>()?;

    if coords.len() % 2 != 0 {
        return Err(RasterError::OddCoordinateCount {
            count: coords.len(),
        });
    }

    let points = coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect();
    Ok(points)
}

/// Sample a uniform Catmull-Rom spline through the control points.
///
/// The curve passes through every control point. Endpoint tangents use
/// duplicated boundary points. Sampling density follows the chord
/// length of each segment so neighboring samples stay roughly one
/// pixel apart.
pub fn sample_spline(points: &[Point]) -> Vec<Point> {
    match points.len() {
        0 => vec![],
        1 => vec![points[0]],
        count => {
            let mut samples = vec![];

            for index in 0..(count - 1) {
                let p0 = points[index.saturating_sub(1)];
                let p1 = points[index];
                let p2 = points[index + 1];
                let p3 = points[(index + 2).min(count - 1)];

                let steps = p1.distance(&p2).ceil().max(1.0) as usize;
                for step in 0..steps {
                    let t = step as f64 / steps as f64;
                    samples.push(catmull_rom(p0, p1, p2, p3, t));
                }
            }

            samples.push(points[count - 1]);
            samples
        }
    }
}

fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let eval = |c0: f64, c1: f64, c2: f64, c3: f64| {
        0.5 * ((2.0 * c1)
            + (c2 - c0) * t
            + (2.0 * c0 - 5.0 * c1 + 4.0 * c2 - c3) * t.powi(2)
            + (3.0 * c1 - c0 - 3.0 * c2 + c3) * t.powi(3))
    };

    Point::new(eval(p0.x, p1.x, p2.x, p3.x), eval(p0.y, p1.y, p2.y, p3.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_line() {
        let points = parse_control_points("").unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn parse_coordinate_pairs() {
        let points = parse_control_points("1 2 3.5 -4").unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.5, -4.0)]);
    }

    #[test]
    fn parse_rejects_odd_count() {
        let err = parse_control_points("1 2 3").unwrap_err();
        assert!(matches!(err, RasterError::OddCoordinateCount { count: 3 }));
    }

    #[test]
    fn parse_rejects_bad_float() {
        let err = parse_control_points("1 oops").unwrap_err();
        assert!(matches!(err, RasterError::InvalidCoordinate { .. }));
    }

    #[test]
    fn spline_passes_through_control_points() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 3.0),
            Point::new(9.0, 5.0),
        ];
        let samples = sample_spline(&points);

        for point in &points {
            assert!(
                samples.iter().any(|s| s.distance(point) < 1e-9),
                "control point {:?} missing from samples",
                point
            );
        }
    }

    #[test]
    fn spline_of_single_point() {
        let samples = sample_spline(&[Point::new(2.0, 7.0)]);
        assert_eq!(samples, vec![Point::new(2.0, 7.0)]);
    }
}
