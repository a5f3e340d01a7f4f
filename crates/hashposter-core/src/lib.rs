//! # HashPoster Core
//!
//! Deterministic poster generation: a SHA-256 seeded xorshift generator
//! and the layered scene composer that consumes it (background, jittered
//! shape grid, radial ray motif, center anchor).
//!
//! The same seed and parameters always produce the same [`Scene`].

pub mod color;
pub mod composer;
pub mod error;
pub mod geometry;
pub mod params;
pub mod rng;
pub mod scene;

pub use color::Rgb;
pub use composer::{compose, Composer, Phase};
pub use error::PosterError;
pub use geometry::{Circle, Element, Line, Point, Rect};
pub use params::PosterParams;
pub use rng::XorShift32;
pub use scene::{ComposeStats, Scene};
