use cubespace_common::Direction;
use cubespace_layout::CubeLayout;
use glam::Vec3;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(6.0, 3.0, 4.0),
            target: Vec3::ZERO,
            fov_degrees: 30.0,
        }
    }
}

impl RenderView {
    /// A view aimed at the center of the given layout.
    pub fn centered_on(layout: &CubeLayout) -> Self {
        Self {
            target: layout.center(),
            ..Self::default()
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a finished layout and a view configuration, then
/// produces output. It never mutates the layout.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render the layout from the given view.
    fn render(&self, layout: &CubeLayout, view: &RenderView) -> Self::Output;
}

/// Text renderer for CLI output, logging, and testing the render interface.
///
/// Produces a human-readable listing of the cubelet descriptors.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, layout: &CubeLayout, view: &RenderView) -> String {
        let mut out = String::new();
        let params = layout.params();
        out.push_str(&format!(
            "=== Cube Layout (size={}, spacing={:.3}) ===\n",
            params.cube_size,
            params.spacing()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        for cubelet in layout.cubelets() {
            let p = cubelet.position;
            out.push_str(&format!(
                "  [{},{},{}] {:<8} pos=({:.2}, {:.2}, {:.2}) stickers=",
                cubelet.coord.x,
                cubelet.coord.y,
                cubelet.coord.z,
                cubelet.kind.to_string(),
                p.x,
                p.y,
                p.z
            ));
            for (i, dir) in Direction::ORDER.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                match cubelet.sticker(*dir) {
                    Some(color) => out.push_str(&color.to_string()),
                    None => out.push('-'),
                }
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubespace_layout::{ColorScheme, FaceletString, LayoutParams, PieceKind};

    fn solved_layout() -> CubeLayout {
        CubeLayout::build(
            &FaceletString::solved(),
            &ColorScheme::classic(),
            &LayoutParams::default(),
        )
        .unwrap()
    }

    #[test]
    fn text_renderer_lists_all_cubelets() {
        let layout = solved_layout();
        let output = TextRenderer::new().render(&layout, &RenderView::default());

        assert_eq!(output.matches("pos=").count(), 27);
        assert_eq!(
            output.matches("corner").count(),
            layout.count_of(PieceKind::Corner)
        );
        assert!(output.contains("interior"));
        assert!(output.contains("size=2"));
    }

    #[test]
    fn text_renderer_shows_sticker_colors() {
        let layout = solved_layout();
        let output = TextRenderer::new().render(&layout, &RenderView::default());
        assert!(output.contains("#a60027")); // classic red on the F face
        assert!(output.contains('-')); // interior slots stay unfilled
    }

    #[test]
    fn view_centered_on_layout() {
        let layout = solved_layout();
        let view = RenderView::centered_on(&layout);
        assert_eq!(view.target, layout.center());
        assert_eq!(view.fov_degrees, 30.0);
        assert_eq!(view.eye, Vec3::new(6.0, 3.0, 4.0));
    }
}
