/// Radius of the whole clock face. Presses beyond it never reach a ring.
pub const FACE_RADIUS: f64 = 130.0;
/// Orbit of the outer ring (minutes, and hours 1-12 on the 24-hour face).
pub const OUTER_RING_RADIUS: f64 = 112.0;
/// Orbit of the inner ring (12-hour hours, and hours 13-00 on the 24-hour face).
pub const INNER_RING_RADIUS: f64 = 76.0;
/// Clickable radius around every tick centre.
pub const TICK_RADIUS: f64 = 18.0;
/// Pointers at or beyond this radius belong to the outer band.
pub const BAND_SPLIT_RADIUS: f64 = (OUTER_RING_RADIUS + INNER_RING_RADIUS) / 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center`, `degrees` clockwise from 12 o'clock.
    /// Screen coordinates: y grows downwards.
    pub fn on_circle(center: Point, radius: f64, degrees: f64) -> Self {
        let rad = degrees.to_radians();
        Self::new(center.x + radius * rad.sin(), center.y - radius * rad.cos())
    }

    pub fn offset_from(&self, origin: Point) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Pointer position relative to the face centre.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    /// Degrees clockwise from 12 o'clock, in `[0, 360)`.
    pub angle: f64,
    pub radius: f64,
}

impl Polar {
    pub fn from_offset(center: Point, pointer: Point) -> Self {
        let (dx, dy) = (pointer.x - center.x, pointer.y - center.y);
        let radius = dx.hypot(dy);

        // atan2(0, -0) is PI, so the degenerate vector needs its own branch
        if radius == 0.0 || !radius.is_finite() {
            return Self { angle: 0.0, radius: 0.0 };
        }

        Self {
            angle: normalize_degrees(dx.atan2(-dy).to_degrees()),
            radius,
        }
    }
}

/// Wraps any angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cardinal_angles() {
        let cases = [
            (Point::new(0.0, -10.0), 0.0),
            (Point::new(10.0, 0.0), 90.0),
            (Point::new(0.0, 10.0), 180.0),
            (Point::new(-10.0, 0.0), 270.0),
        ];

        for (pointer, expected) in cases {
            let polar = Polar::from_offset(ORIGIN, pointer);
            assert!(close(polar.angle, expected), "{pointer:?} -> {}", polar.angle);
            assert!(close(polar.radius, 10.0));
        }
    }

    #[test]
    fn test_zero_vector_is_angle_zero() {
        let center = Point::new(40.0, 40.0);
        let polar = Polar::from_offset(center, center);
        assert_eq!(polar, Polar { angle: 0.0, radius: 0.0 });

        let nan = Polar::from_offset(center, Point::new(f64::NAN, 3.0));
        assert_eq!(nan.angle, 0.0);
    }

    #[test]
    fn test_on_circle_inverts_polar() {
        let center = Point::new(150.0, 150.0);
        for degrees in [0.0, 30.0, 135.0, 270.0, 354.0] {
            let p = Point::on_circle(center, OUTER_RING_RADIUS, degrees);
            let polar = Polar::from_offset(center, p);
            assert!(close(polar.angle, degrees), "{degrees} -> {}", polar.angle);
            assert!(close(polar.radius, OUTER_RING_RADIUS));
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
        assert_eq!(normalize_degrees(f64::INFINITY), 0.0);
    }
}
