//! Headless snapshot: evolve Mercury, project the grid, write a PNG.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use glam::DVec2;
use image::Rgb;

use crate::error::Result;
use crate::grid::make_grid;
use crate::projection::{radial_transform, segments, FlammProjection, Masked};
use crate::renderer::{mix, Canvas};
use crate::simulation::{Body, Preset, Simulation};
use crate::tracker::{ExtremaTracker, PerihelionMarker};

const BACKGROUND_COLOUR: Rgb<u8> = Rgb([0x16, 0x16, 0x16]);
const GRID_COLOUR: Rgb<u8> = Rgb([0x40, 0x40, 0x40]);
const TRAJECTORY_COLOUR: Rgb<u8> = Rgb([0x60, 0x60, 0x60]);
const PERIHELION_COLOUR: Rgb<u8> = Rgb([0xa0, 0xa0, 0xa0]);
const MERCURY_COLOUR: Rgb<u8> = Rgb([0xff, 0x00, 0x00]);
const SUN_COLOUR: Rgb<u8> = Rgb([0xff, 0xff, 0x00]);

const SUN_RADIUS: f64 = 0.8;
const MERCURY_RADIUS: f64 = 0.2;
const PERIHELION_RADIUS: f64 = 0.2;

/// How grid lines are warped around the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionStyle {
    /// Perspective view of Flamm's paraboloid.
    Flamm,
    /// Radial squeeze `r(1 - rs/r)^4`.
    Radial,
}

impl FromStr for ProjectionStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "flamm" => Ok(ProjectionStyle::Flamm),
            "radial" => Ok(ProjectionStyle::Radial),
            _ => Err(format!("unknown style '{s}', options: flamm, radial")),
        }
    }
}

pub struct SnapshotConfig {
    pub preset: Preset,
    pub width: u32,
    pub height: u32,
    pub world_width: f64,
    pub world_height: f64,
    pub grid_lines: [usize; 2],
    pub grid_resolution: [usize; 2],
    /// Horizon radius used to warp the grid; exaggerated far beyond the Sun's.
    pub grid_rs: f64,
    pub style: ProjectionStyle,
    /// Macro-steps to integrate; the preset decides when `None`.
    pub macro_steps: Option<usize>,
    pub output: PathBuf,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            preset: Preset::Perihelion,
            width: 1024,
            height: 1024,
            world_width: 16.0,
            world_height: 16.0,
            grid_lines: [16, 16],
            grid_resolution: [50, 50],
            grid_rs: 0.017,
            style: ProjectionStyle::Flamm,
            macro_steps: None,
            output: PathBuf::from("mercury.png"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mercury-snapshot", about = "Render Mercury's precessing orbit over a curved grid")]
pub struct Args {
    /// newtonian, perihelion or background
    #[arg(long)]
    pub preset: Option<Preset>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    #[arg(long)]
    pub world_width: Option<f64>,
    #[arg(long)]
    pub world_height: Option<f64>,
    /// Grid lines per axis
    #[arg(long)]
    pub grid_lines: Option<usize>,
    /// Sample points per grid line
    #[arg(long)]
    pub grid_resolution: Option<usize>,
    #[arg(long)]
    pub grid_rs: Option<f64>,
    /// flamm or radial
    #[arg(long)]
    pub style: Option<ProjectionStyle>,
    #[arg(long)]
    pub steps: Option<usize>,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SnapshotConfig {
    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(p) = args.preset {
            self.preset = p;
        }
        if let Some(v) = args.width {
            self.width = v;
        }
        if let Some(v) = args.height {
            self.height = v;
        }
        if let Some(v) = args.world_width {
            self.world_width = v;
        }
        if let Some(v) = args.world_height {
            self.world_height = v;
        }
        if let Some(v) = args.grid_lines {
            self.grid_lines = [v, v];
        }
        if let Some(v) = args.grid_resolution {
            self.grid_resolution = [v, v];
        }
        if let Some(v) = args.grid_rs {
            self.grid_rs = v;
        }
        if let Some(v) = args.style {
            self.style = v;
        }
        if args.steps.is_some() {
            self.macro_steps = args.steps;
        }
        if let Some(v) = args.output {
            self.output = v;
        }
        self
    }

    pub fn world_lower(&self) -> DVec2 {
        -self.world_upper()
    }

    pub fn world_upper(&self) -> DVec2 {
        DVec2::new(self.world_width, self.world_height) / 2.0
    }
}

pub fn parse_args() -> SnapshotConfig {
    SnapshotConfig::default().with_args(Args::parse())
}

/// Everything a frame shows, in world coordinates.
pub struct Scene {
    pub mercury: Body,
    pub sun: Body,
    pub trajectory: Vec<DVec2>,
    pub perihelia: Vec<DVec2>,
    pub grid: Vec<Vec<Masked>>,
}

pub fn build_scene(config: &SnapshotConfig) -> Result<Scene> {
    let mut simulation = Simulation::new(config.preset);
    let sun = simulation.sun;
    let steps = config
        .macro_steps
        .unwrap_or_else(|| config.preset.default_macro_steps());

    // without precession every pass is pinned to one mark
    let pin = config.preset == Preset::Newtonian;
    let mut marker = PerihelionMarker::new();
    let mut perihelia = Vec::new();
    {
        let mut tracker = ExtremaTracker::new(&sun).on_periapsis(|p| {
            if !pin {
                perihelia.push(p);
            } else if let Some(mark) = marker.visit(p) {
                perihelia.push(mark);
            }
        });
        for _ in 0..steps {
            simulation.step(Some(&mut tracker))?;
        }
    }

    log::info!(
        "{} preset: {} macro-steps, t={:.2}, {} perihelia",
        config.preset.name(),
        steps,
        simulation.time,
        perihelia.len()
    );

    Ok(Scene {
        mercury: simulation.mercury,
        sun,
        trajectory: simulation.trajectory,
        perihelia,
        grid: project_grid(config, sun.position),
    })
}

fn project_grid(config: &SnapshotConfig, centre: DVec2) -> Vec<Vec<Masked>> {
    let grid = make_grid(
        config.world_lower(),
        config.world_upper(),
        config.grid_lines,
        config.grid_resolution,
    );
    match config.style {
        ProjectionStyle::Flamm => {
            let reference = DVec2::new(config.world_width, config.world_height);
            let projection = FlammProjection::new(centre, config.grid_rs, reference);
            grid.lines().map(|line| projection.project_line(line)).collect()
        }
        ProjectionStyle::Radial => grid
            .lines()
            .map(|line| {
                line.iter()
                    .map(|&p| radial_transform(p, centre, config.grid_rs, 1.0, 4.0))
                    .collect()
            })
            .collect(),
    }
}

pub fn draw_scene(scene: &Scene, config: &SnapshotConfig) -> Canvas {
    let mut canvas = Canvas::new(
        config.width,
        config.height,
        config.world_lower(),
        config.world_upper(),
        BACKGROUND_COLOUR,
    );
    let centre = scene.sun.position;

    // grid fades out with distance from the Sun
    let max_radius = (config.world_width + config.world_height) / 2.0 / 3.0;
    for line in &scene.grid {
        for (start, end) in segments(line) {
            let radius = ((start + end) / 2.0 - centre).length();
            let frac = 1.0 - (radius / max_radius).min(1.0);
            canvas.line(start, end, mix(GRID_COLOUR, BACKGROUND_COLOUR, frac), 1.0);
        }
    }

    let total = scene.trajectory.len() as f64;
    for (t, pair) in scene.trajectory.windows(2).enumerate() {
        let colour = mix(TRAJECTORY_COLOUR, BACKGROUND_COLOUR, t as f64 / total);
        canvas.line(pair[0], pair[1], colour, 2.0);
    }

    let count = scene.perihelia.len();
    for (i, &perihelion) in scene.perihelia.iter().enumerate() {
        let frac = if count == 1 {
            1.0
        } else {
            0.5 + 0.5 * i as f64 / (count - 1) as f64
        };
        canvas.disc(perihelion, PERIHELION_RADIUS, mix(PERIHELION_COLOUR, BACKGROUND_COLOUR, frac));
    }

    canvas.disc(scene.sun.position, SUN_RADIUS, SUN_COLOUR);
    canvas.disc(scene.mercury.position, MERCURY_RADIUS, MERCURY_COLOUR);
    canvas
}

pub fn render_snapshot(config: &SnapshotConfig) -> Result<PathBuf> {
    let scene = build_scene(config)?;
    let canvas = draw_scene(&scene, config);
    canvas.save(&config.output)?;
    log::info!("wrote {}x{} snapshot", config.width, config.height);
    Ok(config.output.clone())
}
