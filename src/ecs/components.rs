use bevy::prelude::*;

use super::animation::SpriteStripAnimation;

/// Marker for the one animated character in the demo.
#[derive(Component)]
pub struct Wizard;

/// What the wizard is doing this tick. Exactly one of the two animations is
/// advanced and drawn per tick, selected by this state.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardState {
    #[default]
    Idle,
    Attacking,
}

/// The wizard's two playbacks. Owned by the entity, never shared.
#[derive(Component)]
pub struct WizardAnimations {
    pub idle: SpriteStripAnimation,
    pub attack: SpriteStripAnimation,
}

/// Countdown since the last action; the idle animation only plays once this
/// runs out. Ticked from `Res<Time>` like every other clock in the demo.
#[derive(Component, Deref, DerefMut)]
pub struct IdleTimer(pub Timer);

impl IdleTimer {
    pub fn from_seconds(interval: f32) -> Self {
        Self(Timer::from_seconds(interval, TimerMode::Once))
    }
}

#[derive(Bundle)]
pub struct WizardBundle {
    pub wizard: Wizard,
    pub state: WizardState,
    pub animations: WizardAnimations,
    pub idle_timer: IdleTimer,
    pub sprite: Sprite,
    pub transform: Transform,
}

impl WizardBundle {
    pub fn new(
        idle: SpriteStripAnimation,
        attack: SpriteStripAnimation,
        idle_timeout: f32,
        position: Vec2,
    ) -> Self {
        let sprite = Sprite {
            image: idle.image().clone(),
            texture_atlas: Some(TextureAtlas {
                layout: idle.layout().clone(),
                index: 0,
            }),
            ..Default::default()
        };

        Self {
            wizard: Wizard,
            state: WizardState::Idle,
            animations: WizardAnimations { idle, attack },
            idle_timer: IdleTimer::from_seconds(idle_timeout),
            sprite,
            transform: Transform::from_translation(position.extend(0.0)),
        }
    }
}
