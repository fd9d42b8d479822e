//! Ball simulation
//!
//! All physics lives here. Given a seed and a config it is deterministic:
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No platform dependencies; drawing goes through the `Surface` trait

pub mod collision;
pub mod particle;
pub mod simulation;

pub use collision::{
    WallHit, bounce_off_walls, outside_walls, pair_mut, pull_inside, resolve_elastic,
};
pub use particle::Particle;
pub use simulation::{FrameStats, Simulation};
