pub mod config;
pub mod core;
pub mod engine;
pub mod gesture;
pub mod hal;
pub mod observability;
pub mod voice;
