pub mod config;
pub mod error;
pub mod types;

pub use config::{LayoutConfig, PrefabSet};
pub use error::{LayoutError, Result};
pub use types::{Orientation, PrefabId, PrefabKind, Side};
