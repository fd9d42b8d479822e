//! A single ball

use glam::Vec2;

use crate::render::{Color, Surface};

/// A ball entity.
///
/// `radius` and `color` are set at creation and never change; position and
/// velocity are only touched by the simulation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    color: Color,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Issue a filled circle at the current position
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, self.color);
    }

    /// True if the two discs interpenetrate (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Particle) -> bool {
        self.is_within(other.pos, self.radius + other.radius)
    }

    /// True if `point` is strictly closer than `threshold` to this center
    #[inline]
    pub fn is_within(&self, point: Vec2, threshold: f32) -> bool {
        self.pos.distance(point) < threshold
    }

    /// Kinetic energy with radius standing in for mass: 1/2 r |v|^2
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.radius * self.vel.length_squared()
    }

    /// Momentum with radius standing in for mass
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.vel * self.radius
    }
}
