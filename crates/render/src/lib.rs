//! Rendering adapter: renderer-agnostic interface over cube layouts.
//!
//! # Invariants
//! - Renderers never mutate the layout; cube truth is layout-owned.
//! - Frame pacing is owned here, not by the layout engine.

mod frame;
mod renderer;

pub use frame::FrameScheduler;
pub use renderer::{RenderView, Renderer, TextRenderer};

pub fn crate_info() -> &'static str {
    "cubespace-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
