use glam::{DVec2, DVec3};

use super::Masked;

/// Pinhole camera looking down the synthetic depth axis onto the screen plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlammCamera {
    /// Camera position; `z` is measured along the depth axis.
    pub position: DVec3,
    /// Depth of the screen plane.
    pub screen_z: f64,
}

impl FlammCamera {
    pub const DEFAULT_HEIGHT: f64 = 100.0;

    pub fn new(position: DVec3, screen_z: f64) -> Self {
        Self { position, screen_z }
    }

    /// Camera at the default height straight above `centre`, screen at depth 0.
    pub fn above(centre: DVec2) -> Self {
        Self::new(centre.extend(Self::DEFAULT_HEIGHT), 0.0)
    }

    pub fn with_screen_z(mut self, screen_z: f64) -> Self {
        self.screen_z = screen_z;
        self
    }

    pub fn xy(&self) -> DVec2 {
        self.position.truncate()
    }

    /// Project a point lifted to `depth` onto the screen plane.
    pub fn project(&self, point: DVec2, depth: f64) -> Masked {
        let scale = (self.screen_z - self.position.z).abs() / (depth - self.position.z).abs();
        let projected = self.xy() + (point - self.xy()) * scale;
        if projected.is_finite() {
            Masked::Valid(projected)
        } else {
            Masked::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn screen_depth_is_identity() {
        let camera = FlammCamera::above(DVec2::new(1.0, -2.0));
        let p = DVec2::new(4.0, 3.0);
        assert_eq!(camera.project(p, 0.0), Masked::Valid(p));
    }

    #[test]
    fn nearer_points_are_magnified() {
        let camera = FlammCamera::above(DVec2::ZERO);
        let p = DVec2::new(2.0, 0.0);
        let near = camera.project(p, 50.0).valid().unwrap();
        let far = camera.project(p, -100.0).valid().unwrap();
        assert_relative_eq!(near.x, 4.0);
        assert_relative_eq!(far.x, 1.0);
    }

    #[test]
    fn point_at_camera_depth_is_masked() {
        let camera = FlammCamera::above(DVec2::ZERO);
        assert_eq!(camera.project(DVec2::X, 100.0), Masked::Invalid);
    }

    #[test]
    fn moved_screen_scales_everything() {
        let camera = FlammCamera::above(DVec2::ZERO).with_screen_z(50.0);
        let p = camera.project(DVec2::new(2.0, 2.0), 0.0).valid().unwrap();
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);
    }
}
