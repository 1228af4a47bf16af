//! Sprite sync: push the active playback's frame into the wizard's sprite.

use bevy::prelude::*;

use super::super::components::*;

/// Selects the frame to show this tick and writes it into the `Sprite`.
///
/// This is the draw step of the loop: frame selection happens here, after
/// behavior has advanced playbacks, and an overshot playback wraps here
/// (see [`SpriteStripAnimation::current_frame`]). Swapping the image and
/// atlas layout along with the index keeps the sprite consistent when the
/// state changed this tick.
///
/// [`SpriteStripAnimation::current_frame`]: super::super::animation::SpriteStripAnimation::current_frame
pub fn sync_wizard_sprite(
    mut wizards: Query<(&WizardState, &mut WizardAnimations, &mut Sprite), With<Wizard>>,
) {
    for (state, mut animations, mut sprite) in wizards.iter_mut() {
        let animation = match state {
            WizardState::Attacking => &mut animations.attack,
            WizardState::Idle => &mut animations.idle,
        };
        let frame = animation.current_frame();

        if sprite.image != *animation.image() {
            sprite.image = animation.image().clone();
        }
        match sprite.texture_atlas.as_mut() {
            Some(atlas) => {
                if atlas.layout != *animation.layout() {
                    atlas.layout = animation.layout().clone();
                }
                atlas.index = frame;
            }
            None => {
                sprite.texture_atlas = Some(TextureAtlas {
                    layout: animation.layout().clone(),
                    index: frame,
                });
            }
        }
    }
}
