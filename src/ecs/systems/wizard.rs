//! The wizard state machine.

use std::time::Duration;

use bevy::prelude::*;

use super::super::components::*;
use crate::events::PlayerAction;

/// Advances one wizard by one tick.
///
/// While attacking, the idle countdown is pinned (reset every tick) so it
/// cannot run out mid-attack, and only the attack playback advances; the
/// attack ends on the tick its playback runs past its duration, which also
/// rewinds it for next time.
///
/// While idle, an attack edge flips the state for the *next* tick; the rest
/// of the idle handling still runs this tick, so a mid-flight idle playback
/// gets its final advance. The idle playback itself only starts once the
/// countdown runs out, and keeps advancing afterwards as long as it is
/// mid-flight.
pub fn step_wizard(
    state: &mut WizardState,
    animations: &mut WizardAnimations,
    idle_timer: &mut Timer,
    attack_requested: bool,
    delta: Duration,
) {
    let dt = delta.as_secs_f32();
    match *state {
        WizardState::Attacking => {
            idle_timer.reset();
            animations.attack.advance(dt);
            if animations.attack.is_complete() {
                animations.attack.reset();
                *state = WizardState::Idle;
            }
        }
        WizardState::Idle => {
            if attack_requested {
                *state = WizardState::Attacking;
                idle_timer.reset();
            }

            idle_timer.tick(delta);
            if idle_timer.is_finished() {
                idle_timer.reset();
                animations.idle.advance(dt);
            } else if animations.idle.is_active() {
                animations.idle.advance(dt);
            }
        }
    }
}

/// Drains this tick's player actions and steps every wizard.
///
/// Actions are consumed whether or not they have an effect: an attack edge
/// arriving mid-attack is discarded, not queued.
pub fn wizard_behavior_system(
    time: Res<Time>,
    mut actions: MessageReader<PlayerAction>,
    mut wizards: Query<(&mut WizardState, &mut WizardAnimations, &mut IdleTimer), With<Wizard>>,
) {
    let attack_requested = actions
        .read()
        .any(|action| matches!(action, PlayerAction::Attack));

    for (mut state, mut animations, mut idle_timer) in wizards.iter_mut() {
        step_wizard(
            &mut state,
            &mut animations,
            &mut idle_timer.0,
            attack_requested,
            time.delta(),
        );
    }
}
