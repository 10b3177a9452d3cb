//! Cartesian ↔ polar conversion in the plane.

use glam::DVec2;

/// Polar coordinates `(r, phi)` with `phi` in `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub r: f64,
    pub phi: f64,
}

impl Polar {
    pub fn new(r: f64, phi: f64) -> Self {
        Self { r, phi }
    }

    pub fn to_cartesian(self) -> DVec2 {
        pol2cart(self.r, self.phi)
    }
}

pub fn cart2pol(cartesian: DVec2) -> Polar {
    Polar::new(cartesian.length(), cartesian.y.atan2(cartesian.x))
}

pub fn pol2cart(r: f64, phi: f64) -> DVec2 {
    r * DVec2::new(phi.cos(), phi.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn unit_axes() {
        let p = cart2pol(DVec2::new(0.0, 2.0));
        assert_relative_eq!(p.r, 2.0);
        assert_relative_eq!(p.phi, FRAC_PI_2);

        let q = cart2pol(DVec2::new(-3.0, 0.0));
        assert_relative_eq!(q.phi, PI);
    }

    #[test]
    fn polar_back_to_cartesian() {
        let v = DVec2::new(1.5, -2.25);
        let back = cart2pol(v).to_cartesian();
        assert_relative_eq!(back.x, v.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, v.y, epsilon = 1e-12);
    }

    #[test]
    fn origin_has_zero_radius() {
        let p = cart2pol(DVec2::ZERO);
        assert_eq!(p.r, 0.0);
        assert_eq!(p.phi, 0.0);
    }
}
