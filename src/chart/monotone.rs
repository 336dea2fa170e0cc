//! Monotone cubic interpolation
//!
//! Builds the cubic Bézier segments of a line that passes through every
//! point without overshooting between them, assuming x increases
//! (Fritsch–Carlson tangents, as in the usual "monotoneX" chart curve).

/// A point in drawing coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cubic Bézier from the previous segment's end to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub control1: Point,
    pub control2: Point,
    pub to: Point,
}

/// Segments joining consecutive `points`.
///
/// Fewer than two points produce no segments. Two points produce a straight
/// line, expressed as a cubic with control points on the line.
pub fn monotone_segments(points: &[Point]) -> Vec<CubicSegment> {
    match points.len() {
        0 | 1 => Vec::new(),
        2 => {
            let slope = secant(points[0], points[1]);
            vec![segment(points[0], points[1], slope, slope)]
        }
        _ => {
            let tangents = tangents(points);
            points
                .windows(2)
                .zip(tangents.windows(2))
                .map(|(p, t)| segment(p[0], p[1], t[0], t[1]))
                .collect()
        }
    }
}

fn tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    let mut tangents = vec![0.0; n];

    for i in 1..n - 1 {
        tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }

    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

    tangents
}

/// Tangent at `p1`, clamped so the curve stays monotone around it
fn interior_tangent(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = secant(p0, p1);
    let s1 = secant(p1, p2);
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);

    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_nan() {
        0.0
    } else {
        tangent
    }
}

/// One-sided tangent for an end point given the tangent at its neighbour
fn end_tangent(p0: Point, p1: Point, neighbour: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (p1.y - p0.y) / h - neighbour) / 2.0
    }
}

fn secant(p0: Point, p1: Point) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        0.0
    } else {
        (p1.y - p0.y) / h
    }
}

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn segment(from: Point, to: Point, t0: f64, t1: f64) -> CubicSegment {
    let dx = (to.x - from.x) / 3.0;
    CubicSegment {
        control1: Point::new(from.x + dx, from.y + dx * t0),
        control2: Point::new(to.x - dx, to.y - dx * t1),
        to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_too_few_points() {
        assert!(monotone_segments(&[]).is_empty());
        assert!(monotone_segments(&[Point::new(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn test_two_points_straight_line() {
        let segments = monotone_segments(&[Point::new(0.0, 0.0), Point::new(3.0, 6.0)]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].control1, Point::new(1.0, 2.0));
        assert_eq!(segments[0].control2, Point::new(2.0, 4.0));
        assert_eq!(segments[0].to, Point::new(3.0, 6.0));
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let points: Vec<Point> = (0..5).map(|i| Point::new(i as f64 * 3.0, i as f64 * 2.0)).collect();
        let segments = monotone_segments(&points);

        assert_eq!(segments.len(), 4);
        for segment in segments {
            for control in [segment.control1, segment.control2] {
                assert!(approx(control.y, control.x * 2.0 / 3.0), "{:?}", control);
            }
        }
    }

    #[test]
    fn test_segments_end_on_points() {
        let points = vec![
            Point::new(0.0, 10.0),
            Point::new(10.0, 12.0),
            Point::new(20.0, 30.0),
            Point::new(30.0, 31.0),
        ];
        let ends: Vec<Point> = monotone_segments(&points).iter().map(|s| s.to).collect();
        assert_eq!(ends, points[1..].to_vec());
    }

    #[test]
    fn test_no_overshoot_on_increasing_data() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.1),
            Point::new(3.0, 5.0),
            Point::new(4.0, 5.0),
        ];

        let segments = monotone_segments(&points);
        for (segment, from) in segments.iter().zip(points.iter()) {
            let (lo, hi) = (from.y.min(segment.to.y), from.y.max(segment.to.y));
            for control in [segment.control1, segment.control2] {
                assert!(control.y >= lo - 1e-9 && control.y <= hi + 1e-9, "{:?}", segment);
            }
        }
    }

    #[test]
    fn test_local_extremum_has_flat_tangent() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 5.0), Point::new(2.0, 0.0)];
        let segments = monotone_segments(&points);
        assert!(approx(segments[0].control2.y, 5.0));
        assert!(approx(segments[1].control1.y, 5.0));
    }
}
