//! Camera system for the tunnel.
//!
//! The rig turns the scroll offset into a dolly position and fog density;
//! the core camera turns that position into GPU-ready matrices.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Offset-driven camera dolly and fog density.
pub mod rig;
