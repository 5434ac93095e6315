//! GPU-facing pieces of the tunnel.
//!
//! The beam gradient material and its uniform layouts, WGSL composition via
//! naga-oil, cylinder tessellation, and a wgpu-backed render bridge.

/// Beam gradient material: uniform layouts and CPU shading mirror.
pub mod beam_gradient;
/// [`RenderBridge`](crate::bridge::RenderBridge) writing into wgpu buffers.
pub mod bridge;
/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// Cylinder tessellation for beams and rails.
pub mod mesh;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
