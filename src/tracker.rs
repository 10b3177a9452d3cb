//! Streaming periapsis/apoapsis detection.

use std::fmt;

use glam::DVec2;

use crate::simulation::Body;

/// Anything the tracker can measure a radius from.
pub trait HasPosition {
    fn pos(&self) -> DVec2;
}

impl HasPosition for DVec2 {
    fn pos(&self) -> DVec2 {
        *self
    }
}

impl HasPosition for Body {
    fn pos(&self) -> DVec2 {
        self.position
    }
}

/// Sign of the last radius change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Fewer than two samples seen.
    #[default]
    Unknown,
    Increasing,
    Decreasing,
}

pub type ApsisCallback<'a> = Box<dyn FnMut(DVec2) + 'a>;

/// Tracks the distance of a moving point from a fixed reference and calls back
/// when the distance passes a local minimum (periapsis) or maximum (apoapsis).
///
/// Only the previous sample is kept. An extremum is reported one sample after it
/// happened, with the position of the extremal sample itself; nothing is
/// interpolated between samples, so resolution comes from the step size.
pub struct ExtremaTracker<'a> {
    reference: DVec2,
    on_periapsis: Option<ApsisCallback<'a>>,
    on_apoapsis: Option<ApsisCallback<'a>>,
    direction: Direction,
    /// radius and position from the last call to `add_point`
    previous: Option<(f64, DVec2)>,
}

impl<'a> ExtremaTracker<'a> {
    pub fn new<R: HasPosition + ?Sized>(reference: &R) -> Self {
        Self {
            reference: reference.pos(),
            on_periapsis: None,
            on_apoapsis: None,
            direction: Direction::Unknown,
            previous: None,
        }
    }

    pub fn on_periapsis(mut self, callback: impl FnMut(DVec2) + 'a) -> Self {
        self.on_periapsis = Some(Box::new(callback));
        self
    }

    pub fn on_apoapsis(mut self, callback: impl FnMut(DVec2) + 'a) -> Self {
        self.on_apoapsis = Some(Box::new(callback));
        self
    }

    pub fn reference(&self) -> DVec2 {
        self.reference
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn add_point<P: HasPosition + ?Sized>(&mut self, point: &P) {
        let point = point.pos();
        let radius = self.reference.distance(point);

        if let Some((before, before_point)) = self.previous {
            self.process_radius(before, radius, before_point);
        }

        self.previous = Some((radius, point));
    }

    fn process_radius(&mut self, before: f64, current: f64, extremum: DVec2) {
        match self.direction {
            Direction::Unknown => {
                self.direction = if before < current {
                    Direction::Increasing
                } else {
                    Direction::Decreasing
                };
            }
            Direction::Increasing if current < before => {
                log::debug!("apoapsis at ({:.4}, {:.4}), r={:.6}", extremum.x, extremum.y, before);
                if let Some(callback) = self.on_apoapsis.as_mut() {
                    callback(extremum);
                }
                self.direction = Direction::Decreasing;
            }
            Direction::Decreasing if current > before => {
                log::debug!("periapsis at ({:.4}, {:.4}), r={:.6}", extremum.x, extremum.y, before);
                if let Some(callback) = self.on_periapsis.as_mut() {
                    callback(extremum);
                }
                self.direction = Direction::Increasing;
            }
            _ => {}
        }
    }
}

impl fmt::Debug for ExtremaTracker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtremaTracker")
            .field("reference", &self.reference)
            .field("direction", &self.direction)
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}

/// Marks repeated perihelion passes at one fixed location.
///
/// The first pass is skipped (the orbit starts there). The second is recorded
/// and every later mark is pinned to it, which hides the drift of a
/// sample-resolution detector on an orbit that should not precess.
#[derive(Debug, Clone, Default)]
pub struct PerihelionMarker {
    skipped_first: bool,
    pinned: Option<DVec2>,
    visited: usize,
}

impl PerihelionMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a perihelion pass and return where to mark it, if at all.
    pub fn visit(&mut self, point: DVec2) -> Option<DVec2> {
        self.visited += 1;
        if !self.skipped_first {
            self.skipped_first = true;
            return None;
        }
        Some(*self.pinned.get_or_insert(point))
    }

    pub fn visited(&self) -> usize {
        self.visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polar::pol2cart;

    fn samples(radii: &[f64]) -> Vec<DVec2> {
        radii
            .iter()
            .enumerate()
            .map(|(i, &r)| pol2cart(r, 0.1 * i as f64))
            .collect()
    }

    #[test]
    fn reports_extremal_samples() {
        let points = samples(&[5.0, 4.0, 3.0, 4.0, 5.0, 6.0, 5.0]);
        let mut peri = Vec::new();
        let mut apo = Vec::new();

        {
            let mut tracker = ExtremaTracker::new(&DVec2::ZERO)
                .on_periapsis(|p| peri.push(p))
                .on_apoapsis(|p| apo.push(p));
            for p in &points {
                tracker.add_point(p);
            }
        }

        assert_eq!(peri, vec![points[2]]);
        assert_eq!(apo, vec![points[5]]);
    }

    #[test]
    fn silent_while_direction_unknown() {
        let mut fired = 0;
        {
            let mut tracker = ExtremaTracker::new(&DVec2::ZERO)
                .on_periapsis(|_| fired += 1);
            tracker.add_point(&DVec2::new(5.0, 0.0));
            assert_eq!(tracker.direction(), Direction::Unknown);
            tracker.add_point(&DVec2::new(4.0, 0.0));
            assert_eq!(tracker.direction(), Direction::Decreasing);
        }
        assert_eq!(fired, 0);
    }

    #[test]
    fn equal_radii_change_nothing() {
        let mut tracker = ExtremaTracker::new(&DVec2::ZERO);
        for r in [1.0, 2.0, 2.0, 2.0] {
            tracker.add_point(&DVec2::new(r, 0.0));
        }
        assert_eq!(tracker.direction(), Direction::Increasing);
    }

    #[test]
    fn radius_measured_from_reference() {
        let mut apo = Vec::new();
        {
            let reference = DVec2::new(10.0, 0.0);
            let mut tracker = ExtremaTracker::new(&reference).on_apoapsis(|p| apo.push(p));
            // moving away from the origin, but towards the reference
            for x in [0.0, 1.0, 2.0] {
                tracker.add_point(&DVec2::new(x, 0.0));
            }
            assert_eq!(tracker.direction(), Direction::Decreasing);
        }
        assert!(apo.is_empty());
    }

    #[test]
    fn accepts_bodies() {
        let mut peri = Vec::new();
        {
            let sun = Body::sun();
            let mut tracker = ExtremaTracker::new(&sun).on_periapsis(|p| peri.push(p));
            for x in [3.0, 2.0, 3.0] {
                let body = Body::new(DVec2::new(x, 0.0), DVec2::ZERO, 1.0).unwrap();
                tracker.add_point(&body);
            }
        }
        assert_eq!(peri, vec![DVec2::new(2.0, 0.0)]);
    }

    #[test]
    fn marker_skips_then_pins() {
        let mut marker = PerihelionMarker::new();
        assert_eq!(marker.visit(DVec2::new(1.0, 0.0)), None);
        assert_eq!(marker.visit(DVec2::new(2.0, 0.0)), Some(DVec2::new(2.0, 0.0)));
        assert_eq!(marker.visit(DVec2::new(2.1, 0.1)), Some(DVec2::new(2.0, 0.0)));
        assert_eq!(marker.visited(), 3);
    }
}
