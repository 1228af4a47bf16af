use bevy::prelude::*;

pub mod app_state;
pub mod assets;
pub mod ecs;
pub mod events;
pub mod plugins;
pub mod settings;
pub mod settings_types;

/// Per-user directory for settings and anything else the demo persists.
pub fn storage_dir() -> std::path::PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    path.push("Firewizard");
    let _ = std::fs::create_dir_all(&path);
    path
}

pub struct CoreEventsPlugin;

impl Plugin for CoreEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<events::PlayerAction>();
    }
}

/// Everything the demo needs on top of bevy's own plugins: message types,
/// app states, sheet loading, input translation, and the wizard systems.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CoreEventsPlugin,
            assets::SheetLoadPlugin,
            plugins::input::InputPlugin,
            ecs::plugin::GamePlugin,
        ))
        .insert_resource(ClearColor(Color::WHITE))
        .init_state::<app_state::AppState>();
    }
}
