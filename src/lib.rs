//! Canvas Balls - elastic bouncing balls on a 2D canvas
//!
//! Core modules:
//! - `sim`: Simulation (placement, integration, wall bounces, elastic collisions)
//! - `render`: Drawing surface abstraction, colors, and the HTML canvas backend
//! - `settings`: Serializable run configuration
//! - `error`: Crate error type

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use render::{Color, PALETTE, RecordingSurface, Surface};
pub use settings::SimConfig;
pub use sim::{Particle, Simulation};

/// Default configuration values
pub mod consts {
    /// Number of balls spawned by `initialize`
    pub const BALL_COUNT: usize = 50;
    /// Velocity components are drawn from [-SPEED/2, SPEED/2]
    pub const SPEED: f32 = 10.0;
    /// Uniform ball radius
    pub const BALL_RADIUS: f32 = 10.0;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 1400.0;
    pub const CANVAS_HEIGHT: f32 = 700.0;

    /// Placement spacing as a multiple of the configured radius
    pub const SPAWN_SPACING: f32 = 2.0;
}
