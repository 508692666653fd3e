// src/draw/mod.rs
// The drawing surface module
// One trait, two backends: an op-recording surface and the nannou window

pub mod recording;
pub mod surface;
pub mod window_surface;

pub use recording::{RecordingSurface, SurfaceOp};
pub use surface::DrawSurface;
pub use window_surface::WindowSurface;
