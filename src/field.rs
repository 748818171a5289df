//! Oriented (rotated, anisotropic) 2-D Gaussian hills

/// One rotated elliptical Gaussian bump.
///
/// The coefficients are derived once from the spread along each axis and the
/// rotation angle; evaluation is then a single quadratic form and `exp`.
/// Both sigmas must be strictly positive. Callers are responsible for that,
/// the generator guarantees it by drawing sigmas from `(1, hill_size + 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedGaussianField {
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    c: f64,
}

impl OrientedGaussianField {
    pub fn new(center: (f64, f64), sigma: (f64, f64), theta: f64) -> Self {
        let (cx, cy) = center;
        let (sx, sy) = sigma;
        debug_assert!(sx > 0.0 && sy > 0.0, "sigma must be positive");

        let (sin, cos) = theta.sin_cos();
        let sin_2t = (2.0 * theta).sin();
        let sx2 = sx * sx;
        let sy2 = sy * sy;

        let a = cos * cos / (2.0 * sx2) + sin * sin / (2.0 * sy2);
        let b = sin_2t / (4.0 * sy2) - sin_2t / (4.0 * sx2);
        let c = sin * sin / (2.0 * sx2) + cos * cos / (2.0 * sy2);

        Self { cx, cy, a, b, c }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.cx, self.cy)
    }

    /// Coefficients `(a, b, c)` of the quadratic form.
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Density at `(x, y)`, peaking at exactly 1.0 on the center.
    ///
    /// Mathematically the density is positive everywhere, but `exp` underflows
    /// to 0.0 once the exponent drops below about -745, i.e. roughly 38 sigma
    /// from the center, so distant points read as exactly zero.
    pub fn value(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.cx;
        let dy = y - self.cy;
        (-(self.a * dx * dx + 2.0 * self.b * dx * dy + self.c * dy * dy)).exp()
    }
}
