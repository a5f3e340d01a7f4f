use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use hashposter_core::{compose, PosterParams, Scene};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::OutputError;
use crate::svg::SvgWriter;

/// Identifies the seeding and bit-generation scheme in metadata sidecars.
pub const GENERATOR: &str = "sha256-xorshift32";

/// Description of a generated poster, written as a JSON sidecar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterMeta {
    pub seed: String,
    pub size: u32,
    pub cells: u32,
    pub generator: String,
    pub summary: PosterSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterSummary {
    pub elements: usize,
    pub rects: u32,
    pub circles: u32,
    pub skipped_cells: u32,
    pub rays: u32,
    pub draws: u64,
}

impl PosterMeta {
    pub fn new(params: &PosterParams, scene: &Scene) -> Self {
        let stats = scene.stats;
        Self {
            seed: params.seed.clone(),
            size: params.size,
            cells: params.cells,
            generator: GENERATOR.to_string(),
            summary: PosterSummary {
                elements: scene.element_count(),
                rects: stats.rects,
                circles: stats.circles,
                skipped_cells: stats.skipped_cells,
                rays: stats.rays,
                draws: stats.total_draws(),
            },
        }
    }
}

fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Write `scene` as an SVG file, creating parent directories as needed.
pub fn write_svg_file(path: &Path, scene: &Scene) -> Result<(), OutputError> {
    create_parent_dirs(path)?;
    let file = File::create(path)?;
    let mut writer = SvgWriter::new(BufWriter::new(file));
    writer.write(scene)?;
    info!("wrote SVG poster to {}", path.display());
    Ok(())
}

/// Write poster metadata as pretty-printed JSON.
pub fn write_meta_file(path: &Path, meta: &PosterMeta) -> Result<(), OutputError> {
    create_parent_dirs(path)?;
    let mut json = serde_json::to_string_pretty(meta)?;
    json.push('\n');
    fs::write(path, json)?;
    info!("wrote poster metadata to {}", path.display());
    Ok(())
}

/// Compose and write a poster. Parameters are validated before anything
/// touches the filesystem.
pub fn generate_poster(params: &PosterParams, out: &Path) -> Result<Scene, OutputError> {
    let scene = compose(params)?;
    write_svg_file(out, &scene)?;
    Ok(scene)
}
