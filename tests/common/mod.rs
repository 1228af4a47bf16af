use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

use firewizard::CoreEventsPlugin;
use firewizard::app_state::AppState;
use firewizard::ecs::GamePlugin;
use firewizard::ecs::animation::SpriteStripAnimation;
use firewizard::ecs::components::{WizardAnimations, WizardBundle, WizardState};
use firewizard::events::PlayerAction;

/// Headless stage driving the wizard with hand-fed time and actions.
///
/// Runs the real behavior and sprite-sync systems on a `MinimalPlugins` app;
/// time advances only through [`advance_time`](Self::advance_time), so every
/// scenario is deterministic.
pub struct TestStage {
    app: App,
    wizard: Entity,
}

impl TestStage {
    pub fn new(idle_duration: f32, attack_duration: f32, idle_timeout: f32) -> Self {
        let mut app = App::new();
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
        app.add_plugins(MinimalPlugins)
            .add_plugins(StatesPlugin)
            .add_plugins((CoreEventsPlugin, GamePlugin));
        app.insert_state(AppState::InGame);

        // Placeholder images in standalone collections: nothing here
        // renders, so the sheets never have to exist. Four frames matches
        // the 512px-wide / 128px-frame sheets the demo ships with.
        let mut images = Assets::<Image>::default();
        let mut layouts = Assets::<TextureAtlasLayout>::default();
        let mut strip = |frame_count: usize, duration| {
            SpriteStripAnimation::new(
                images.add(Image::default()),
                layouts.add(TextureAtlasLayout::from_grid(
                    UVec2::new(128, 128),
                    frame_count as u32,
                    1,
                    None,
                    None,
                )),
                frame_count,
                duration,
            )
        };
        let wizard = app
            .world_mut()
            .spawn(WizardBundle::new(
                strip(4, idle_duration),
                strip(4, attack_duration),
                idle_timeout,
                Vec2::ZERO,
            ))
            .id();

        // One update to initialize time before scenarios start stepping.
        app.update();

        Self { app, wizard }
    }

    /// Runs one frame with exactly `duration` on the clock.
    pub fn advance_time(&mut self, duration: Duration) {
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(duration));
        self.app.update();
        self.app
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    }

    pub fn step(&mut self, dt: f32) {
        self.advance_time(Duration::from_secs_f32(dt));
    }

    pub fn steps(&mut self, count: usize, dt: f32) {
        for _ in 0..count {
            self.step(dt);
        }
    }

    /// Queues an attack edge for the next frame.
    pub fn send_attack(&mut self) {
        let mut actions = self
            .app
            .world_mut()
            .resource_mut::<Messages<PlayerAction>>();
        actions.write(PlayerAction::Attack);
    }

    pub fn state(&self) -> WizardState {
        *self
            .app
            .world()
            .entity(self.wizard)
            .get::<WizardState>()
            .unwrap()
    }

    pub fn idle_elapsed(&self) -> f32 {
        self.animations().idle.elapsed()
    }

    pub fn attack_elapsed(&self) -> f32 {
        self.animations().attack.elapsed()
    }

    pub fn sprite_frame(&self) -> usize {
        self.app
            .world()
            .entity(self.wizard)
            .get::<Sprite>()
            .unwrap()
            .texture_atlas
            .as_ref()
            .unwrap()
            .index
    }

    fn animations(&self) -> &WizardAnimations {
        self.app
            .world()
            .entity(self.wizard)
            .get::<WizardAnimations>()
            .unwrap()
    }
}
