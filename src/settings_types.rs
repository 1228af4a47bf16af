use bevy::prelude::Resource;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

/// Tunables for the animated character.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct WizardSettings {
    /// Asset-relative path to the idle sprite strip.
    pub idle_sheet: String,
    /// Asset-relative path to the attack sprite strip.
    pub attack_sheet: String,
    /// Width of one frame in pixels. Frame counts are derived from the
    /// sheet width at load time, never configured.
    pub sprite_width: u32,
    pub sprite_height: u32,
    /// Seconds a full idle playback takes.
    pub idle_duration: f32,
    /// Seconds a full attack playback takes.
    pub attack_duration: f32,
    /// Seconds of inactivity before the idle animation starts.
    pub idle_timeout: f32,
    /// World-space position of the wizard (origin at window center).
    pub position: [f32; 2],
}

#[derive(Resource, serde::Serialize, serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub window: WindowSettings,
    pub wizard: WizardSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings {
                title: "Firewizard".to_string(),
                width: 500,
                height: 500,
            },
            wizard: WizardSettings {
                idle_sheet: "wizard/idle.png".to_string(),
                attack_sheet: "wizard/flame_jet.png".to_string(),
                sprite_width: 128,
                sprite_height: 128,
                idle_duration: 0.5,
                attack_duration: 1.25,
                idle_timeout: 4.0,
                position: [0.0, 0.0],
            },
        }
    }
}
