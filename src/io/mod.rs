//! Input/output operations, configuration and error handling
//!
//! This module contains I/O-related functionality including:
//! - Command-line parsing and the pipeline runner
//! - The image toolkit seam used by every decode and encode
//! - Progress bars, configuration defaults and error types

/// Command-line interface and pipeline runner
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types and the crate-wide result alias
pub mod error;
/// Thin wrappers around the image toolkit
pub mod imaging;
/// Progress reporting for long-running phases
pub mod progress;
