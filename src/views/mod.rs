// src/views/mod.rs

pub mod turtle;

pub use turtle::{HistoryReport, Turtle};
