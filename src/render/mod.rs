//! Rendering module
//!
//! Draw commands go through the `Surface` trait. The HTML canvas backend is
//! only compiled for wasm32.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use color::{Color, PALETTE, palette_color};
pub use surface::{DrawCommand, RecordingSurface, Surface};
