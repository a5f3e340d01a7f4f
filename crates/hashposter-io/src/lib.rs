//! # HashPoster I/O
//!
//! SVG serialization of composed scenes and the file-level outputs: the
//! poster document itself and an optional JSON metadata sidecar.

pub mod error;
pub mod poster;
pub mod svg;

pub use error::OutputError;
pub use poster::{generate_poster, write_meta_file, write_svg_file, PosterMeta};
pub use svg::{render_svg, SvgWriter};
