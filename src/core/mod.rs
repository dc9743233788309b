pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod flight;
pub mod preview;
pub mod scene;
pub mod timer;
pub mod window;
