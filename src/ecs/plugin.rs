//! Game ECS plugin
//!
//! Registers the wizard systems with proper ordering using [`GameSet`].

use bevy::prelude::*;

use super::systems::{self, GameSet};
use crate::app_state::AppState;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        systems::configure_game_sets(app);

        app.add_systems(
            Update,
            systems::wizard_behavior_system
                .run_if(in_state(AppState::InGame))
                .in_set(GameSet::Behavior),
        )
        .add_systems(
            Update,
            systems::sync_wizard_sprite
                .run_if(in_state(AppState::InGame))
                .in_set(GameSet::RenderSync),
        );
    }
}
