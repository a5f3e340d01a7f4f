use serde::{Deserialize, Serialize};

use crate::geometry::Element;

/// Generator usage and shape tallies recorded while composing a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeStats {
    pub background_draws: u64,
    pub grid_draws: u64,
    pub motif_draws: u64,
    pub anchor_draws: u64,
    pub skipped_cells: u32,
    pub rects: u32,
    pub circles: u32,
    pub rays: u32,
}

impl ComposeStats {
    pub fn total_draws(&self) -> u64 {
        self.background_draws + self.grid_draws + self.motif_draws + self.anchor_draws
    }
}

/// An ordered list of drawable elements on a square canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas edge in pixels.
    pub size: u32,
    pub elements: Vec<Element>,
    pub stats: ComposeStats,
}

impl Scene {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            elements: Vec::new(),
            stats: ComposeStats::default(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn grid_shapes(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.is_grid_shape())
    }
}
