//! Shared utilities: palette/color mixing and the frame clock.

/// Palette constants and linear color mixing.
pub mod color;
/// Scaled simulation clock fed by frame timestamps.
pub mod frame_clock;
