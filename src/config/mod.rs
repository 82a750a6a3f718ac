//! Configuration loaders for the demo tools.

pub mod demo;

pub use demo::{load_config, DemoConfig, DemoOutputConfig, FrameEntry};
