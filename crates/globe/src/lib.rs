use thiserror::Error;

pub mod commands {
    pub mod cmax;
    pub mod color;
    pub mod geo;
    pub mod points;
}

mod swatch;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Color(#[from] color_globe::Error),
    #[error("Could not serialize points: {0}")]
    Json(#[from] serde_json::Error),
}
