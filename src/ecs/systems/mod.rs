//! ECS systems organized by domain
//!
//! Systems execute in a well-defined order managed by [`GameSet`].

mod rendering;
mod wizard;

pub use rendering::*;
pub use wizard::*;

use bevy::prelude::*;

/// Core game loop system sets with explicit ordering.
///
/// The execution order is:
/// 1. **Input** - Translate raw device input into action messages
/// 2. **Behavior** - Run the wizard state machine, advance playbacks
/// 3. **RenderSync** - Select the frame to show and push it into the sprite
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Pump device edges into `PlayerAction` messages
    Input,
    /// State transitions and animation advancement
    Behavior,
    /// Sync the active animation's frame to the sprite
    RenderSync,
}

/// Configure the system set ordering for the game loop
pub fn configure_game_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Behavior.after(GameSet::Input),
            GameSet::RenderSync.after(GameSet::Behavior),
        ),
    );
}
