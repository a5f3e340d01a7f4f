use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::debug;

use hashposter_core::params::{DEFAULT_CELLS, DEFAULT_SIZE};
use hashposter_core::{PosterError, PosterParams};
use hashposter_io::{generate_poster, write_meta_file, PosterMeta};

/// Deterministically generate an abstract SVG poster from a text seed.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Seed text; the same seed always yields the same poster.
    pub seed: String,

    /// Output SVG path (parent directories are created).
    #[arg(long, default_value = "./out.svg")]
    pub out: PathBuf,

    /// Square canvas size in pixels (>= 64).
    #[arg(long, default_value_t = DEFAULT_SIZE as i64, allow_negative_numbers = true)]
    pub size: i64,

    /// Grid cells per side (>= 2).
    #[arg(long, default_value_t = DEFAULT_CELLS as i64, allow_negative_numbers = true)]
    pub cells: i64,

    /// Also write a JSON metadata sidecar to this path.
    #[arg(long)]
    pub meta: Option<PathBuf>,
}

impl Args {
    pub fn params(&self) -> Result<PosterParams, PosterError> {
        PosterParams::from_args(&self.seed, self.size, self.cells)
    }
}

/// `path` with `.` components and repeated separators dropped, as shown in
/// the completion line.
pub fn display_path(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}

/// Generate the poster described by `args` and return the completion line.
pub fn run(args: &Args) -> anyhow::Result<String> {
    let params = args.params()?;
    debug!("generating poster: {:?}", params);

    let scene = generate_poster(&params, &args.out)
        .with_context(|| format!("failed to generate {}", args.out.display()))?;

    if let Some(meta_path) = &args.meta {
        let meta = PosterMeta::new(&params, &scene);
        write_meta_file(meta_path, &meta)
            .with_context(|| format!("failed to write metadata {}", meta_path.display()))?;
    }

    Ok(format!(
        "Wrote {} (seed={})",
        display_path(&args.out).display(),
        args.seed
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["hashposter", "abc123"]).unwrap();
        assert_eq!(args.out, PathBuf::from("./out.svg"));
        assert_eq!(args.size, 800);
        assert_eq!(args.cells, 16);
        assert!(args.meta.is_none());
        assert_eq!(args.params(), Ok(PosterParams::with_seed("abc123")));
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "hashposter", "s", "--out", "x/y.svg", "--size", "64", "--cells", "2", "--meta",
            "x/y.json",
        ])
        .unwrap();
        assert_eq!(args.params(), Ok(PosterParams::new("s", 64, 2)));
        assert_eq!(args.meta, Some(PathBuf::from("x/y.json")));
    }

    #[test]
    fn test_seed_required() {
        assert!(Args::try_parse_from(["hashposter"]).is_err());
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let args = Args::try_parse_from(["hashposter", "s", "--size", "-5"]).unwrap();
        assert_eq!(args.size, -5);
        assert_eq!(args.params().unwrap_err().to_string(), "--size must be >= 64");

        let args = Args::try_parse_from(["hashposter", "s", "--cells", "-1"]).unwrap();
        assert_eq!(args.params().unwrap_err().to_string(), "--cells must be >= 2");
    }

    #[test]
    fn test_display_path() {
        let shown = |p: &str| display_path(Path::new(p)).display().to_string();
        assert_eq!(shown("./out.svg"), "out.svg");
        assert_eq!(shown("a//b/./c.svg"), "a/b/c.svg");
        assert_eq!(shown("/tmp/./x.svg"), "/tmp/x.svg");
        assert_eq!(shown("."), ".");
        assert_eq!(shown("../p.svg"), "../p.svg");
    }
}
