// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    // seconds between turtle animation ticks
    pub tick_interval: f32,
}

#[derive(Debug, Deserialize)]
pub struct OscConfig {
    pub rx_port: u16,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub script_file: String,
}

#[derive(Debug, Deserialize)]
pub struct WanderConfig {
    pub min_length: f32,
    pub max_length: f32,
    pub max_turn: f32,
}
