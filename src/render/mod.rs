// src/render/mod.rs
// The turtle rendering module

pub mod turtle_renderer;

pub use turtle_renderer::TurtleRenderer;
