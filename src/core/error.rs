use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Tile ({x}, {y}) is outside the {width}x{height} battle grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("Sector {index} has no tiles")]
    EmptySector { index: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Battle JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
