//! Keyboard input pump.

use bevy::prelude::*;

use crate::app_state::AppState;
use crate::ecs::GameSet;
use crate::events::PlayerAction;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            keyboard_input_system
                .run_if(in_state(AppState::InGame))
                .in_set(GameSet::Input),
        );
    }
}

/// Translates space-bar edges into attack actions.
///
/// `just_pressed` reports only the tick the key goes down, so holding the
/// key produces exactly one action.
fn keyboard_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut actions: MessageWriter<PlayerAction>,
) {
    if keys.just_pressed(KeyCode::Space) {
        actions.write(PlayerAction::Attack);
    }
}
