//! Error types for the visualizer
//!
//! Sorting itself never fails; errors come from building the drawing state
//! from bad input and from the terminal.

use std::io;
use thiserror::Error;

/// Errors that can occur while setting up or running the visualizer
#[derive(Debug, Error)]
pub enum VisualizerError {
    /// The array handed to the canvas has no elements
    #[error("cannot draw an empty array")]
    EmptyArray,

    /// The startup configuration is inconsistent
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Terminal setup, drawing or event polling failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}
