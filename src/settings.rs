//! Run configuration
//!
//! Fixed for the lifetime of a `Simulation`. On the web it can be overridden
//! from LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::render::{Color, PALETTE};

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of balls spawned by `initialize`
    pub ball_count: usize,
    /// Velocity scale; each component is drawn from [-speed/2, speed/2]
    pub speed: f32,
    /// Uniform ball radius (also the mass proxy in collisions)
    pub radius: f32,
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
    /// Ball colors, cycled by creation ordinal
    pub palette: Vec<Color>,
    /// Rejection-sampling cap per ball. `None` retries forever, which never
    /// terminates when the balls cannot fit.
    pub max_placement_attempts: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ball_count: BALL_COUNT,
            speed: SPEED,
            radius: BALL_RADIUS,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            palette: PALETTE.to_vec(),
            max_placement_attempts: None,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject values the placement or step math cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidConfig("radius must be finite and > 0".into()));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(Error::InvalidConfig("speed must be finite and >= 0".into()));
        }
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(Error::InvalidConfig("canvas size must be finite".into()));
        }
        // Placement samples from [r, size - r), which must be non-empty
        if self.width <= 2.0 * self.radius || self.height <= 2.0 * self.radius {
            return Err(Error::InvalidConfig(format!(
                "canvas {}x{} cannot hold a ball of radius {}",
                self.width, self.height, self.radius
            )));
        }
        if self.palette.is_empty() {
            return Err(Error::InvalidConfig("palette must not be empty".into()));
        }
        if self.max_placement_attempts == Some(0) {
            return Err(Error::InvalidConfig(
                "max_placement_attempts must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Canvas size in whole pixels, for sizing the backing element
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "canvas_balls_config";

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
