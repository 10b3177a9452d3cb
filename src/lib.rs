//! Mercury's relativistic perihelion precession, drawn over Flamm's paraboloid.
//!
//! The core is a perturbed two-body integrator ([`simulation`]), the embedding
//! projection of a world-space grid ([`grid`], [`projection`]) and a streaming
//! apsis detector ([`tracker`]). [`snapshot`] wires them to a PNG renderer.

pub mod error;
pub mod grid;
pub mod metrics;
pub mod polar;
pub mod projection;
pub mod renderer;
pub mod simulation;
pub mod snapshot;
pub mod tracker;

pub use error::{Result, SimError};
pub use grid::{make_grid, Grid};
pub use polar::{cart2pol, pol2cart};
pub use projection::{flamm_projection, radial_transform, segments, FlammCamera, FlammProjection, Masked};
pub use simulation::{acceleration, advance, Body, Preset, Simulation, StepParams, RL2, RS};
pub use tracker::{Direction, ExtremaTracker, HasPosition, PerihelionMarker};
