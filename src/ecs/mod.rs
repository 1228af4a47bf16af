//! Entity Component System module
//!
//! Contains the wizard's components, systems, and plugin. Systems execute in
//! a well-defined order managed by [`systems::GameSet`].

pub mod animation;
pub mod components;
pub mod plugin;
pub mod systems;

// Re-export commonly used items
pub use plugin::GamePlugin;
pub use systems::GameSet;
