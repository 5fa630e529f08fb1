//! wgpu render backend for cube layouts.
//!
//! Renders the 27 cubelets as per-face-colored boxes with black wireframe
//! edges, viewed through an orbit camera.
//!
//! # Invariants
//! - The renderer never mutates the layout; geometry is rebuilt only when a
//!   new layout is uploaded.
//! - Camera motion lives outside the layout engine.
//! - All GPU state is owned by an explicit `Viewer` context, never by
//!   module-level globals.

mod camera;
mod gpu;
mod mesh;
mod shaders;
mod viewer;

pub use camera::OrbitCamera;
pub use gpu::WgpuRenderer;
pub use viewer::{Viewer, ViewerError, ViewerFrame};
