/// Equatorial slice of the Schwarzschild geometry.
///
/// dl² = (1 - rs/r)⁻¹dr² + r²dφ²
///
/// Embedded in flat 3D space this slice is Flamm's paraboloid,
/// z(r) = 2√(rs(r - rs)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchwarzschildParams {
    /// Schwarzschild radius rs = 2GM/c²
    pub rs: f64,
}

impl SchwarzschildParams {
    pub fn new(rs: f64) -> Self {
        Self { rs }
    }

    /// At or inside the event horizon.
    pub fn inside_horizon(&self, r: f64) -> bool {
        r <= self.rs
    }

    /// Height of Flamm's paraboloid at radius `r`; `None` at or inside the horizon.
    pub fn flamm_depth(&self, r: f64) -> Option<f64> {
        if self.inside_horizon(r) {
            return None;
        }
        Some(2.0 * (self.rs * (r - self.rs)).sqrt())
    }
}
