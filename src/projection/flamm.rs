use glam::{DVec2, DVec3};

use super::{FlammCamera, Masked};
use crate::metrics::schwarzschild::SchwarzschildParams;

/// Perspective view of Flamm's paraboloid around `centre`.
///
/// Every point is lifted to the paraboloid height of its radius, shifted so the
/// reference point sits at depth 0, and projected through the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlammProjection {
    pub centre: DVec2,
    pub metric: SchwarzschildParams,
    pub camera: FlammCamera,
    reference_depth: f64,
}

impl FlammProjection {
    pub fn new(centre: DVec2, rs: f64, reference: DVec2) -> Self {
        let metric = SchwarzschildParams::new(rs);
        // a reference inside the horizon sits at the rim, depth(rs) = 0
        let reference_depth = metric.flamm_depth(centre.distance(reference)).unwrap_or(0.0);
        Self {
            centre,
            metric,
            camera: FlammCamera::above(centre),
            reference_depth,
        }
    }

    pub fn with_camera(mut self, camera: FlammCamera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_screen_z(mut self, screen_z: f64) -> Self {
        self.camera.screen_z = screen_z;
        self
    }

    /// Depth of `point` relative to the reference; `None` inside the horizon.
    pub fn depth(&self, point: DVec2) -> Option<f64> {
        self.metric
            .flamm_depth(self.centre.distance(point))
            .map(|depth| depth - self.reference_depth)
    }

    pub fn project(&self, point: DVec2) -> Masked {
        match self.depth(point) {
            Some(depth) => self.camera.project(point, depth),
            None => Masked::Invalid,
        }
    }

    pub fn project_line(&self, points: &[DVec2]) -> Vec<Masked> {
        points.iter().map(|&p| self.project(p)).collect()
    }
}

/// Project `points` onto the screen through Flamm's paraboloid.
///
/// Without a `camera` it sits 100 units above `centre`; `screen_z` defaults to 0.
pub fn flamm_projection(
    points: &[DVec2],
    centre: DVec2,
    rs: f64,
    reference: DVec2,
    screen_z: Option<f64>,
    camera: Option<DVec3>,
) -> Vec<Masked> {
    let mut projection = FlammProjection::new(centre, rs, reference);
    if let Some(position) = camera {
        projection = projection.with_camera(FlammCamera::new(position, 0.0));
    }
    projection
        .with_screen_z(screen_z.unwrap_or(0.0))
        .project_line(points)
}
