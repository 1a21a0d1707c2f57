// crates/spiro-core/src/curve/spec.rs

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dist(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Pen color with channels in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// 8-bit channels, rounded.
    pub fn to_u8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Parameters of one spirograph curve.
///
/// Radii are integers because the closing period comes from gcd(r, R).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSpec {
    /// Outer circle radius (R).
    pub big_r: i64,
    /// Inner circle radius (r).
    pub small_r: i64,
    /// Pen distance from the inner center as a fraction of r.
    pub l: f64,
    pub center: Point,
    pub color: Rgb,
}

impl CurveSpec {
    /// Curve drawn at the origin in black.
    pub fn at_origin(big_r: i64, small_r: i64, l: f64) -> Self {
        Self {
            big_r,
            small_r,
            l,
            center: Point::ORIGIN,
            color: Rgb::BLACK,
        }
    }
}
