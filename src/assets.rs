//! Sprite sheet loading.
//!
//! The demo boots in [`AppState::Loading`] with both sheets requested from
//! the asset server. A poll system watches the load states: a failure is
//! surfaced as a [`SpriteSheetError`] and a clean exit, and success derives
//! the frame counts from the sheet widths, spawns the wizard, and flips to
//! [`AppState::InGame`].

use bevy::asset::LoadState;
use bevy::prelude::*;
use thiserror::Error;
use tracing::{error, info};

use crate::app_state::AppState;
use crate::ecs::animation::SpriteStripAnimation;
use crate::ecs::components::WizardBundle;
use crate::settings::Settings;

/// Everything that can go wrong bringing a sprite sheet up.
#[derive(Debug, Error)]
pub enum SpriteSheetError {
    /// The asset server could not produce the image.
    #[error("could not load sprite sheet {path}: {reason}")]
    Load { path: String, reason: String },
    /// The image is narrower than a single frame, so the derived frame
    /// count would be zero.
    #[error("sprite sheet {path} is {width}px wide, narrower than one {frame_width}px frame")]
    TooNarrow {
        path: String,
        width: u32,
        frame_width: u32,
    },
}

/// In-flight image handles, alive only during [`AppState::Loading`].
#[derive(Resource)]
struct SheetHandles {
    idle: Handle<Image>,
    attack: Handle<Image>,
}

pub struct SheetLoadPlugin;

impl Plugin for SheetLoadPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_camera, begin_sheet_load))
            .add_systems(
                Update,
                poll_sheet_load
                    .run_if(in_state(AppState::Loading))
                    .run_if(resource_exists::<SheetHandles>),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn begin_sheet_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<Settings>,
) {
    info!(
        "Loading sprite sheets {:?} and {:?}",
        settings.wizard.idle_sheet, settings.wizard.attack_sheet
    );
    commands.insert_resource(SheetHandles {
        idle: asset_server.load(settings.wizard.idle_sheet.clone()),
        attack: asset_server.load(settings.wizard.attack_sheet.clone()),
    });
}

fn poll_sheet_load(
    mut commands: Commands,
    handles: Res<SheetHandles>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    settings: Res<Settings>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let wizard = &settings.wizard;

    for (path, handle) in [
        (&wizard.idle_sheet, &handles.idle),
        (&wizard.attack_sheet, &handles.attack),
    ] {
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
            abort(
                SpriteSheetError::Load {
                    path: path.clone(),
                    reason: err.to_string(),
                },
                &mut exit,
            );
            return;
        }
    }

    // Both images have to be resident before frame counts can be derived.
    let (Some(idle_image), Some(attack_image)) =
        (images.get(&handles.idle), images.get(&handles.attack))
    else {
        return;
    };

    let frame_size = UVec2::new(wizard.sprite_width, wizard.sprite_height);
    let idle = match strip_animation(
        &wizard.idle_sheet,
        idle_image,
        &handles.idle,
        frame_size,
        wizard.idle_duration,
        &mut layouts,
    ) {
        Ok(animation) => animation,
        Err(err) => {
            abort(err, &mut exit);
            return;
        }
    };
    let attack = match strip_animation(
        &wizard.attack_sheet,
        attack_image,
        &handles.attack,
        frame_size,
        wizard.attack_duration,
        &mut layouts,
    ) {
        Ok(animation) => animation,
        Err(err) => {
            abort(err, &mut exit);
            return;
        }
    };

    info!(
        "Sprite sheets loaded ({} idle frames, {} attack frames)",
        idle.frame_count(),
        attack.frame_count()
    );
    commands.spawn(WizardBundle::new(
        idle,
        attack,
        wizard.idle_timeout,
        Vec2::from(wizard.position),
    ));
    commands.remove_resource::<SheetHandles>();
    next_state.set(AppState::InGame);
}

/// Builds a strip animation over `image`, deriving the frame count from the
/// image width.
fn strip_animation(
    path: &str,
    image: &Image,
    handle: &Handle<Image>,
    frame_size: UVec2,
    duration: f32,
    layouts: &mut Assets<TextureAtlasLayout>,
) -> Result<SpriteStripAnimation, SpriteSheetError> {
    let frame_count = image.width() / frame_size.x;
    if frame_count == 0 {
        return Err(SpriteSheetError::TooNarrow {
            path: path.to_string(),
            width: image.width(),
            frame_width: frame_size.x,
        });
    }

    let layout = TextureAtlasLayout::from_grid(frame_size, frame_count, 1, None, None);
    Ok(SpriteStripAnimation::new(
        handle.clone(),
        layouts.add(layout),
        frame_count as usize,
        duration,
    ))
}

fn abort(err: SpriteSheetError, exit: &mut MessageWriter<AppExit>) {
    error!("{err}");
    exit.write(AppExit::error());
}
