//! Platform abstraction layer
//!
//! Handles the boundary with whatever owns the window:
//! - Input polling (level-triggered queries in, edge-aware frames out)
//! - A scripted autopilot source for headless runs

pub mod input;

pub use input::{Action, Autopilot, FrameInput, HeldKeys, InputSampler, InputSource};
