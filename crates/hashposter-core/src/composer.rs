//! Layered scene composition.
//!
//! A poster is built by running four phases against one generator, in a
//! fixed order: background, grid, radial motif, center anchor. Every phase
//! draws from the shared stream, so changing the order, or the number of
//! draws any phase takes, changes every element after it.

use std::f64::consts::PI;

use log::debug;

use crate::color::Rgb;
use crate::error::PosterError;
use crate::geometry::{Circle, Element, Line, Point, Rect};
use crate::params::PosterParams;
use crate::rng::XorShift32;
use crate::scene::Scene;

/// Probability that a grid cell is left empty.
pub const SKIP_PROBABILITY: f64 = 0.15;
/// Number of rays in the radial motif.
pub const RAY_COUNT: u32 = 40;
/// Total angular jitter span of a ray around its slot (radians), i.e. ±0.06.
pub const RAY_JITTER: f64 = 0.12;

/// One stage of scene composition.
pub trait Phase: std::fmt::Debug {
    /// Draw from `rng` and append elements to `scene`.
    fn apply(&self, rng: &mut XorShift32, scene: &mut Scene, params: &PosterParams);
    /// Short name used in diagnostics.
    fn name(&self) -> &str;
}

// ══════════════════════════════════════════════════════════════════════
// Phases
// ══════════════════════════════════════════════════════════════════════

/// Full-canvas fill. Three draws, not brightened.
#[derive(Debug)]
pub struct BackgroundPhase;

impl Phase for BackgroundPhase {
    fn apply(&self, rng: &mut XorShift32, scene: &mut Scene, _params: &PosterParams) {
        let start = rng.draws();
        scene.push(Element::Background(Rgb::draw(rng, false)));
        scene.stats.background_draws = rng.draws() - start;
    }

    fn name(&self) -> &str {
        "background"
    }
}

/// One jittered shape per grid cell, with some cells left empty.
#[derive(Debug)]
pub struct GridPhase;

impl GridPhase {
    fn place(rng: &mut XorShift32, scene: &mut Scene, x0: f64, y0: f64, cell: f64) {
        let cx = x0 + cell * (0.5 + (rng.next_f64() - 0.5) * 0.5);
        let cy = y0 + cell * (0.5 + (rng.next_f64() - 0.5) * 0.5);
        let center = Point::new(cx, cy);
        let fill = Rgb::draw(rng, true);
        let opacity = 0.25 + rng.next_f64() * 0.65;

        if rng.next_u32() % 2 == 0 {
            let width = cell * (0.25 + rng.next_f64() * 0.7);
            let height = cell * (0.25 + rng.next_f64() * 0.7);
            scene.push(Element::Rect(Rect::centered(center, width, height, fill, opacity)));
            scene.stats.rects += 1;
        } else {
            let radius = cell * (0.12 + rng.next_f64() * 0.35);
            scene.push(Element::Circle(Circle {
                center,
                radius,
                fill,
                opacity,
            }));
            scene.stats.circles += 1;
        }
    }
}

impl Phase for GridPhase {
    fn apply(&self, rng: &mut XorShift32, scene: &mut Scene, params: &PosterParams) {
        let start = rng.draws();
        let cell = params.cell_size();

        for gy in 0..params.cells {
            for gx in 0..params.cells {
                if rng.next_f64() < SKIP_PROBABILITY {
                    scene.stats.skipped_cells += 1;
                    continue;
                }
                let x0 = gx as f64 * cell;
                let y0 = gy as f64 * cell;
                Self::place(rng, scene, x0, y0, cell);
            }
        }

        scene.stats.grid_draws = rng.draws() - start;
    }

    fn name(&self) -> &str {
        "grid"
    }
}

/// Evenly spaced rays around the canvas center.
#[derive(Debug)]
pub struct MotifPhase;

impl Phase for MotifPhase {
    fn apply(&self, rng: &mut XorShift32, scene: &mut Scene, params: &PosterParams) {
        let start = rng.draws();
        let size = params.size as f64;
        let half = size / 2.0;
        let center = Point::new(half, half);
        let inner = size * 0.06;
        let outer = size * 0.32;

        for i in 0..RAY_COUNT {
            let angle = 2.0 * PI * i as f64 / RAY_COUNT as f64 + (rng.next_f64() - 0.5) * RAY_JITTER;
            let reach = outer * (0.8 + 0.4 * rng.next_f64());
            let stroke = Rgb::draw(rng, true);
            let stroke_width = (1 + rng.next_u32() % 4) as f64;
            scene.push(Element::Line(Line {
                start: center.polar(inner, angle),
                end: center.polar(reach, angle),
                stroke,
                stroke_width,
            }));
            scene.stats.rays += 1;
        }

        scene.stats.motif_draws = rng.draws() - start;
    }

    fn name(&self) -> &str {
        "motif"
    }
}

/// Small opaque circle pinning the motif to the canvas center.
#[derive(Debug)]
pub struct AnchorPhase;

impl Phase for AnchorPhase {
    fn apply(&self, rng: &mut XorShift32, scene: &mut Scene, params: &PosterParams) {
        let start = rng.draws();
        let size = params.size as f64;
        let half = size / 2.0;
        scene.push(Element::Anchor(Circle {
            center: Point::new(half, half),
            radius: size * 0.03,
            fill: Rgb::draw(rng, true),
            opacity: 1.0,
        }));
        scene.stats.anchor_draws = rng.draws() - start;
    }

    fn name(&self) -> &str {
        "anchor"
    }
}

// ══════════════════════════════════════════════════════════════════════
// Composer
// ══════════════════════════════════════════════════════════════════════

/// Runs the poster phases in order against a seeded generator.
#[derive(Debug)]
pub struct Composer {
    phases: Vec<Box<dyn Phase>>,
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            phases: vec![
                Box::new(BackgroundPhase),
                Box::new(GridPhase),
                Box::new(MotifPhase),
                Box::new(AnchorPhase),
            ],
        }
    }
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `params`, then build the scene. Nothing is drawn on failure.
    pub fn compose(&self, params: &PosterParams) -> Result<Scene, PosterError> {
        params.validate()?;

        let mut rng = XorShift32::from_seed(&params.seed);
        let mut scene = Scene::new(params.size);
        for phase in &self.phases {
            phase.apply(&mut rng, &mut scene, params);
            debug!(
                "phase '{}' done: {} elements, {} draws so far",
                phase.name(),
                scene.element_count(),
                rng.draws()
            );
        }

        debug!(
            "composed {}px poster ({}x{} grid): {} rects, {} circles, {} cells skipped",
            params.size,
            params.cells,
            params.cells,
            scene.stats.rects,
            scene.stats.circles,
            scene.stats.skipped_cells
        );
        Ok(scene)
    }
}

/// Compose a poster with the standard phase order.
pub fn compose(params: &PosterParams) -> Result<Scene, PosterError> {
    Composer::new().compose(params)
}
