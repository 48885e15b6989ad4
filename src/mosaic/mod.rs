//! Mosaic planning, rendering and orchestration
//!
//! This module contains mosaic-related functionality including:
//! - Grid sizing with the max-size clamp
//! - Per-pixel tile selection into a row-major plan
//! - Parallel fragment rendering and final assembly

/// Fragment layout, parallel rendering and canvas assembly
pub mod composer;
/// End-to-end generation chain and its options
pub mod generator;
/// Grid sizing and per-pixel tile selection
pub mod planner;

pub use generator::{MosaicOptions, MosaicReport};
