use serde::{Deserialize, Serialize};

use crate::error::PosterError;

pub const DEFAULT_SIZE: u32 = 800;
pub const DEFAULT_CELLS: u32 = 16;
/// Smallest canvas edge, in pixels, that still yields a legible poster.
pub const MIN_SIZE: u32 = 64;
pub const MIN_CELLS: u32 = 2;

/// Inputs to one poster build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterParams {
    pub seed: String,
    /// Square canvas edge in pixels.
    pub size: u32,
    /// Grid cells per side.
    pub cells: u32,
}

impl Default for PosterParams {
    fn default() -> Self {
        Self {
            seed: String::new(),
            size: DEFAULT_SIZE,
            cells: DEFAULT_CELLS,
        }
    }
}

impl PosterParams {
    pub fn new(seed: &str, size: u32, cells: u32) -> Self {
        Self {
            seed: seed.to_string(),
            size,
            cells,
        }
    }

    pub fn with_seed(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            ..Default::default()
        }
    }

    /// Build from unchecked command-line integers. Negative values are
    /// reported with the same minimum-size errors as small ones.
    pub fn from_args(seed: &str, size: i64, cells: i64) -> Result<Self, PosterError> {
        if size < MIN_SIZE as i64 {
            return Err(PosterError::SizeTooSmall { size, min: MIN_SIZE });
        }
        if cells < MIN_CELLS as i64 {
            return Err(PosterError::TooFewCells { cells, min: MIN_CELLS });
        }
        let size = u32::try_from(size).map_err(|_| PosterError::OutOfRange {
            flag: "size",
            value: size,
        })?;
        let cells = u32::try_from(cells).map_err(|_| PosterError::OutOfRange {
            flag: "cells",
            value: cells,
        })?;
        Ok(Self::new(seed, size, cells))
    }

    pub fn validate(&self) -> Result<(), PosterError> {
        if self.size < MIN_SIZE {
            return Err(PosterError::SizeTooSmall {
                size: self.size as i64,
                min: MIN_SIZE,
            });
        }
        if self.cells < MIN_CELLS {
            return Err(PosterError::TooFewCells {
                cells: self.cells as i64,
                min: MIN_CELLS,
            });
        }
        Ok(())
    }

    /// Edge length of one grid cell in pixels.
    pub fn cell_size(&self) -> f64 {
        self.size as f64 / self.cells as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = PosterParams::with_seed("abc");
        assert_eq!(p.size, 800);
        assert_eq!(p.cells, 16);
        assert!((p.cell_size() - 50.0).abs() < 1e-12);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_boundaries() {
        assert!(PosterParams::new("s", 64, 2).validate().is_ok());
        assert_eq!(
            PosterParams::new("s", 63, 16).validate(),
            Err(PosterError::SizeTooSmall { size: 63, min: 64 })
        );
        assert_eq!(
            PosterParams::new("s", 800, 1).validate(),
            Err(PosterError::TooFewCells { cells: 1, min: 2 })
        );
    }

    #[test]
    fn test_size_checked_first() {
        let err = PosterParams::new("s", 10, 0).validate().unwrap_err();
        assert_eq!(err.to_string(), "--size must be >= 64");
    }

    #[test]
    fn test_from_args() {
        assert_eq!(
            PosterParams::from_args("s", 64, 2),
            Ok(PosterParams::new("s", 64, 2))
        );
        assert_eq!(
            PosterParams::from_args("s", -5, 16),
            Err(PosterError::SizeTooSmall { size: -5, min: 64 })
        );
        assert_eq!(
            PosterParams::from_args("s", 800, -3),
            Err(PosterError::TooFewCells { cells: -3, min: 2 })
        );
        let err = PosterParams::from_args("s", 1 << 40, 16).unwrap_err();
        assert_eq!(
            err,
            PosterError::OutOfRange {
                flag: "size",
                value: 1 << 40
            }
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let p = PosterParams::new("seed text", 128, 4);
        let json = serde_json::to_string(&p).unwrap();
        let back: PosterParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
