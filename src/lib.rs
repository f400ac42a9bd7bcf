pub mod config;
pub mod content;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod motion;
pub mod playback;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
