//! Simulation state and the per-frame step
//!
//! The host owns the loop: it calls `step` once per repaint and decides when
//! to stop. Nothing here schedules itself.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{bounce_off_walls, outside_walls, pair_mut, pull_inside, resolve_elastic};
use super::particle::Particle;
use crate::consts::SPAWN_SPACING;
use crate::error::{Error, Result};
use crate::render::{Surface, palette_color};
use crate::settings::SimConfig;

/// Counters for the most recent frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particles that had at least one velocity component reflected
    pub wall_bounces: u32,
    /// Collision resolutions applied (each overlapping pair counts up to twice)
    pub collisions: u32,
    /// Overlapping pairs skipped because their centers coincide
    pub skipped: u32,
    /// Particles still past a wall one frame after crossing it, moved back in
    pub pulled_inside: u32,
}

/// All run state: configuration, RNG, and the ball collection
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    bounds: Vec2,
    seed: u64,
    rng: Pcg32,
    /// Balls in creation order
    particles: Vec<Particle>,
    initialized: bool,
    frame: u64,
    stats: FrameStats,
}

impl Simulation {
    /// Create an empty simulation. Call `initialize` to spawn the balls.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            bounds: Vec2::new(config.width, config.height),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            particles: Vec::new(),
            initialized: false,
            frame: 0,
            stats: FrameStats::default(),
        })
    }

    /// Create a simulation from explicit particles, skipping placement.
    ///
    /// Nothing about the particles is checked: the caller is responsible
    /// for radii matching the config, centers inside the canvas, and spacing.
    pub fn from_particles(config: SimConfig, particles: Vec<Particle>) -> Result<Self> {
        let mut sim = Self::new(config, 0)?;
        sim.particles = particles;
        sim.initialized = true;
        Ok(sim)
    }

    /// Spawn `ball_count` balls at random non-overlapping positions.
    ///
    /// Each ball is rejection-sampled until its center is at least
    /// `2 * radius` from every ball already placed. Without
    /// `max_placement_attempts` this never returns if the balls cannot fit.
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Err(Error::AlreadyInitialized(self.particles.len()));
        }

        let count = self.config.ball_count;
        let half_speed = self.config.speed / 2.0;
        self.particles.reserve_exact(count);

        for ordinal in 1..=count {
            let color = palette_color(&self.config.palette, ordinal);
            let pos = self.sample_free_position(ordinal)?;
            let vel = Vec2::new(
                self.rng.random_range(-half_speed..=half_speed),
                self.rng.random_range(-half_speed..=half_speed),
            );
            self.particles
                .push(Particle::new(pos, vel, self.config.radius, color));
        }

        self.initialized = true;
        log::info!(
            "Spawned {} balls on {}x{} canvas (seed {})",
            count,
            self.bounds.x,
            self.bounds.y,
            self.seed
        );
        Ok(())
    }

    /// Rejection-sample a center clear of every placed ball
    fn sample_free_position(&mut self, ordinal: usize) -> Result<Vec2> {
        let r = self.config.radius;
        let spacing = SPAWN_SPACING * r;
        let mut attempts: u32 = 0;

        loop {
            attempts = attempts.saturating_add(1);
            let candidate = Vec2::new(
                self.rng.random_range(r..self.bounds.x - r),
                self.rng.random_range(r..self.bounds.y - r),
            );

            if !self
                .particles
                .iter()
                .any(|p| p.is_within(candidate, spacing))
            {
                log::trace!("Ball {} placed after {} attempts", ordinal, attempts);
                return Ok(candidate);
            }

            if self
                .config
                .max_placement_attempts
                .is_some_and(|max| attempts >= max)
            {
                log::warn!("Gave up placing ball {} after {} attempts", ordinal, attempts);
                return Err(Error::PlacementExhausted { ordinal, attempts });
            }
        }
    }

    /// Advance one frame and redraw.
    ///
    /// Per ball, in creation order: draw at the current position, move by
    /// velocity, reflect off walls, then resolve against every other ball it
    /// overlaps. Each overlapping pair is visited from both sides, so it can
    /// be resolved twice in one frame.
    ///
    /// A ball may end the frame in which it crosses a wall outside the
    /// canvas. If it started the frame outside and is still outside after
    /// moving, it is put back on the boundary, so no ball stays out for two
    /// frames in a row.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();

        let mut stats = FrameStats::default();
        let n = self.particles.len();

        for i in 0..n {
            let ball = &mut self.particles[i];
            ball.draw(surface);
            let was_outside = outside_walls(ball, self.bounds).any();
            ball.pos += ball.vel;
            if bounce_off_walls(ball, self.bounds).any() {
                stats.wall_bounces += 1;
            }
            if was_outside && pull_inside(ball, self.bounds) {
                stats.pulled_inside += 1;
            }

            for j in 0..n {
                if i == j {
                    continue;
                }
                let (a, b) = pair_mut(&mut self.particles, i, j);
                if a.overlaps(b) {
                    if resolve_elastic(a, b) {
                        stats.collisions += 1;
                    } else {
                        stats.skipped += 1;
                    }
                }
            }
        }

        self.frame += 1;
        self.stats = stats;
        log::trace!("Frame {}: {:?}", self.frame, stats);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Canvas (width, height)
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn last_frame_stats(&self) -> FrameStats {
        self.stats
    }

    /// Total kinetic energy, radius as mass
    pub fn kinetic_energy(&self) -> f32 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Total momentum, radius as mass
    pub fn momentum(&self) -> Vec2 {
        self.particles.iter().map(Particle::momentum).sum()
    }
}
