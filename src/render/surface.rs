//! Drawing surface abstraction
//!
//! The simulation only ever clears the surface and fills circles, so that is
//! all a backend has to provide.

use glam::Vec2;

use super::color::Color;

/// Something the simulation can draw onto
pub trait Surface {
    /// Erase the full drawable area
    fn clear(&mut self);

    /// Paint a filled disc
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// A single recorded draw primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

/// Surface that records commands instead of rasterizing them.
///
/// Used for headless runs and tests. Commands accumulate until `take` or
/// `reset` is called.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded commands
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Filled circles recorded since the most recent clear
    pub fn visible_circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.commands[start..].iter().filter_map(|c| match *c {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            DrawCommand::Clear => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}
