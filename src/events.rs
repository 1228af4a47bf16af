use bevy::prelude::Message;

/// Player intent, decoupled from the device that produced it.
///
/// Input systems write these once per edge; the wizard behavior system drains
/// them every tick, so an action is consumed exactly once and behavior can be
/// driven in tests without a keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Message)]
pub enum PlayerAction {
    Attack,
}
