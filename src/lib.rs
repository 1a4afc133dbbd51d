//! Battle Layout - builds fortified battlefields from battle descriptions
//!
//! Load a `Battle`, then hand it to `scene::build_battle` together with a
//! `LayoutConfig` and any `SceneBuilder`.

pub mod battle;
pub mod core;
pub mod layout;
pub mod scene;
