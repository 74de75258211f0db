use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Initial values of the cosmetic toggles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Whether the session starts in dark mode.
    pub dark_mode: bool,
    /// Whether sound effects start enabled.
    pub sound_enabled: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            sound_enabled: false,
        }
    }
}

/// Fixed delays driving the runtime's deferred callbacks, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay after start before the loading screen is dismissed.
    pub loading_delay_ms: u64,
    /// Delay after start before the welcome achievement is unlocked.
    pub first_impression_delay_ms: u64,
    /// Idle time after the last keystroke that clears the trigger buffer.
    pub trigger_idle_ms: u64,
    /// How long an achievement toast stays visible.
    pub toast_lifetime_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 3000,
            first_impression_delay_ms: 5000,
            trigger_idle_ms: 2000,
            toast_lifetime_ms: 5000,
        }
    }
}

impl TimingConfig {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn first_impression_delay(&self) -> Duration {
        Duration::from_millis(self.first_impression_delay_ms)
    }

    pub fn trigger_idle(&self) -> Duration {
        Duration::from_millis(self.trigger_idle_ms)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_millis(self.toast_lifetime_ms)
    }
}

/// Configuration of the hidden keyboard triggers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EasterEggConfig {
    /// Word that opens the terminal when typed anywhere.
    pub terminal_trigger: String,
    /// Whether the Konami sequence watcher is installed.
    pub konami_enabled: bool,
}

impl Default for EasterEggConfig {
    fn default() -> Self {
        Self {
            terminal_trigger: "terminal".to_string(),
            konami_enabled: true,
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Initial values for the cosmetic toggles.
    pub appearance: AppearanceConfig,
    /// Fixed delays used by the runtime scheduler.
    pub timings: TimingConfig,
    /// Keyboard easter eggs.
    pub easter_eggs: EasterEggConfig,
}
