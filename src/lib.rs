// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert on exact values and unwrap freely.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Procedural, scroll-driven 3D tunnel used as a landing-page background.
//!
//! A looping shader-driven color animation runs off accumulated frame time,
//! while an external scroll offset dollies the camera outward and thickens
//! the fog until, at `offset >= 1`, the tunnel stops being drawn at all.
//!
//! # Key entry points
//!
//! - [`engine::TunnelEngine`] - the stateful per-frame driver
//! - [`scene::SceneDescription`] - everything a renderer needs for a frame
//! - [`bridge::RenderBridge`] - how frames reach a renderer
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Architecture
//!
//! Each tick the [`util::frame_clock::FrameClock`] advances, the
//! [`camera::rig::CameraRig`] maps offset and time to camera z and fog
//! density, and the [`scene::SceneComposer`] rebuilds every light, beam and
//! rail as plain values. The engine then commits the frame through a
//! bridge: [`bridge::RecordingBridge`] for headless use, or
//! [`gpu::bridge::WgpuBridge`] to write camera/fog/beam uniforms and
//! instance buffers for a wgpu renderer.

pub mod bridge;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use bridge::{RecordingBridge, RenderBridge};
pub use engine::TunnelEngine;
pub use error::TunnelError;
pub use options::Options;
pub use scene::SceneDescription;
