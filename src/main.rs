use bevy::prelude::*;
use bevy::window::WindowResolution;

use firewizard::{CorePlugin, settings::Settings};

fn main() {
    // Respect RUST_LOG if set, otherwise fall back to the subscriber default.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init()
        .ok();

    let settings = Settings::load();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: settings.window.title.clone(),
                resolution: WindowResolution::new(settings.window.width, settings.window.height),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(settings)
        .add_plugins(CorePlugin)
        .run();
}
