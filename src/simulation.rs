use std::f64::consts::FRAC_PI_2;
use std::str::FromStr;

use glam::DVec2;

use crate::error::{Result, SimError};
use crate::polar::pol2cart;
use crate::tracker::ExtremaTracker;

/// Schwarzschild radius of the Sun, in units of R0.
pub const RS: f64 = 2.95e-7;
/// Specific angular momentum squared, in units of R0².
pub const RL2: f64 = 8.19e-7;

/// A point mass in the orbital plane.
///
/// Bodies are plain values: every integration step returns a new `Body`, so a
/// trajectory can keep old states around without aliasing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Base gravitational acceleration (GM at unit radius). Zero marks a fixed body.
    acc: f64,
}

impl Body {
    pub fn new(position: DVec2, velocity: DVec2, acc: f64) -> Result<Self> {
        if !(acc >= 0.0) {
            return Err(SimError::NegativeBaseAcceleration(acc));
        }
        Ok(Self {
            position,
            velocity,
            acc,
        })
    }

    /// Mercury at perihelion, rotated by `phi` around the Sun.
    ///
    /// Values derived from the NSSDC planetary fact sheet.
    pub fn mercury(phi: f64) -> Self {
        // initial radius (R0), orbital speed (R0/T0), base acceleration (R0³/T0²)
        const RM0: f64 = 4.60;
        const VM0: f64 = 5.10e-1;
        const AM: f64 = 9.90e-1;

        Self {
            position: pol2cart(RM0, phi),
            velocity: pol2cart(VM0, phi + FRAC_PI_2),
            acc: AM,
        }
    }

    pub fn sun() -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            acc: 0.0,
        }
    }

    pub fn acc(&self) -> f64 {
        self.acc
    }

    /// Bodies without base acceleration never move.
    pub fn is_fixed(&self) -> bool {
        self.acc == 0.0
    }
}

/// Acceleration towards the origin including the relativistic correction
///
/// `grfact = 1 + alpha*RS/r + beta*RL2/r²`. With `alpha = beta = 0` this is plain
/// inverse-square gravity. Undefined for a body sitting at the origin.
pub fn acceleration(body: &Body, alpha: f64, beta: f64) -> DVec2 {
    let r = body.position.length();
    let grfact = 1.0 + alpha * RS / r + beta * RL2 / (r * r);
    -body.acc * grfact / (r * r) * (body.position / r)
}

/// One macro-step of the integrator: `length` split into `nsteps` sub-steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    pub length: f64,
    pub nsteps: usize,
    /// Strength of the 1/r³ force term.
    pub alpha: f64,
    /// Strength of the 1/r⁴ force term.
    pub beta: f64,
}

impl StepParams {
    pub fn new(length: f64, nsteps: usize, alpha: f64, beta: f64) -> Self {
        Self {
            length,
            nsteps,
            alpha,
            beta,
        }
    }

    /// A single raw step of size `dt`.
    pub fn single(dt: f64, alpha: f64, beta: f64) -> Self {
        Self::new(dt, 1, alpha, beta)
    }

    pub fn dt(&self) -> f64 {
        self.length / self.nsteps as f64
    }
}

/// Semi-implicit Euler: kick the velocity with the current acceleration, then
/// drift the position with the new velocity.
fn kick_drift(body: &Body, dt: f64, alpha: f64, beta: f64) -> Result<Body> {
    if body.position == DVec2::ZERO {
        return Err(SimError::DegenerateRadius {
            x: body.position.x,
            y: body.position.y,
        });
    }
    let velocity = body.velocity + acceleration(body, alpha, beta) * dt;
    let position = body.position + velocity * dt;
    Ok(Body {
        position,
        velocity,
        ..*body
    })
}

/// Advance `body` by one macro-step and return the new state.
///
/// After every sub-step the new position is handed to `tracker`, if given.
/// Negative lengths integrate backwards in time. Fixed bodies are returned
/// unchanged.
pub fn advance(
    body: &Body,
    params: &StepParams,
    mut tracker: Option<&mut ExtremaTracker<'_>>,
) -> Result<Body> {
    if params.nsteps == 0 {
        return Err(SimError::InvalidStepCount(params.nsteps));
    }
    if body.is_fixed() {
        return Ok(*body);
    }

    let dt = params.dt();
    let mut current = *body;
    for _ in 0..params.nsteps {
        current = kick_drift(&current, dt, params.alpha, params.beta)?;
        if let Some(tracker) = tracker.as_deref_mut() {
            tracker.add_point(&current);
        }
    }

    log::trace!(
        "advanced {} sub-steps of dt={:.4e} to r={:.6}",
        params.nsteps,
        dt,
        current.position.length()
    );
    Ok(current)
}

/// Parameter sets of the three Mercury scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Pure Newtonian orbit, no precession.
    Newtonian,
    /// Strong 1/r⁴ term: the perihelion visibly walks around the Sun.
    Perihelion,
    /// Strong 1/r³ term, finely resolved; used for the still background image.
    Background,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Newtonian, Preset::Perihelion, Preset::Background];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Newtonian => "newtonian",
            Preset::Perihelion => "perihelion",
            Preset::Background => "background",
        }
    }

    /// Integrator parameters, scaled to the speed and base acceleration of `body`.
    pub fn params(self, body: &Body) -> StepParams {
        // time it takes to cover |v| at the body's base acceleration
        let unit = body.velocity.length() / body.acc;
        match self {
            Preset::Newtonian => StepParams::new(2.0 * unit, 40, 0.0, 0.0),
            Preset::Perihelion => StepParams::new(unit, 10, 0.0, 2e6),
            Preset::Background => StepParams::new(unit / 3.0, 1, 5e6, 0.0),
        }
    }

    pub fn default_macro_steps(self) -> usize {
        match self {
            Preset::Newtonian => 350,
            Preset::Perihelion => 1000,
            Preset::Background => 459,
        }
    }
}

impl FromStr for Preset {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| SimError::UnknownPreset(s.to_string()))
    }
}

/// Mercury orbiting a fixed Sun under one preset.
pub struct Simulation {
    pub mercury: Body,
    pub sun: Body,
    pub params: StepParams,
    pub preset: Preset,
    pub time: f64,
    /// Position after every macro-step, starting with the initial one.
    pub trajectory: Vec<DVec2>,
}

impl Simulation {
    pub fn new(preset: Preset) -> Self {
        let mercury = Body::mercury(0.0);
        let mut sim = Self {
            mercury,
            sun: Body::sun(),
            params: preset.params(&mercury),
            preset,
            time: 0.0,
            trajectory: Vec::new(),
        };
        sim.load_preset(preset);
        sim
    }

    pub fn load_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.time = 0.0;
        self.mercury = Body::mercury(0.0);
        self.params = preset.params(&self.mercury);
        self.trajectory = vec![self.mercury.position];
    }

    /// Advance Mercury by one macro-step relative to the Sun.
    pub fn step(&mut self, tracker: Option<&mut ExtremaTracker<'_>>) -> Result<()> {
        self.mercury = advance(&self.mercury, &self.params, tracker)?;
        self.time += self.params.length;
        self.trajectory.push(self.mercury.position);
        Ok(())
    }
}
