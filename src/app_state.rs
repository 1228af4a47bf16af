use bevy::prelude::*;

/// Top-level application states.
///
/// The demo boots into `Loading` while the sprite sheets are fetched from
/// disk, then flips to `InGame` for the rest of its life. Game systems only
/// run in `InGame`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}
