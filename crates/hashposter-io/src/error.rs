use std::io;
use std::string::FromUtf8Error;

use hashposter_core::PosterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("SVG output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("Metadata serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Poster(#[from] PosterError),
}
