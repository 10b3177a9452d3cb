//! Projections of world-space points for display.
//!
//! Points that have no image under a projection (inside the horizon, or
//! otherwise undefined) come back as [`Masked::Invalid`] instead of an error.

pub mod camera;
pub mod flamm;
pub mod radial;

use glam::DVec2;

pub use camera::FlammCamera;
pub use flamm::{flamm_projection, FlammProjection};
pub use radial::radial_transform;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Masked {
    Valid(DVec2),
    Invalid,
}

impl Masked {
    pub fn valid(self) -> Option<DVec2> {
        match self {
            Masked::Valid(p) => Some(p),
            Masked::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Masked::Valid(_))
    }
}

impl From<Option<DVec2>> for Masked {
    fn from(point: Option<DVec2>) -> Self {
        point.map_or(Masked::Invalid, Masked::Valid)
    }
}

/// Consecutive pairs of a polyline. Pairs touching an invalid point are dropped
/// whole, never clipped.
pub fn segments(points: &[Masked]) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
    points.windows(2).filter_map(|pair| match (pair[0], pair[1]) {
        (Masked::Valid(a), Masked::Valid(b)) => Some((a, b)),
        _ => None,
    })
}
