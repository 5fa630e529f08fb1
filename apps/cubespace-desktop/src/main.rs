use anyhow::Result;
use clap::Parser;
use cubespace_common::Color;
use cubespace_layout::{ColorScheme, CubeLayout, FaceletString, LayoutParams, PieceKind};
use cubespace_render::{FrameScheduler, RenderView};
use cubespace_render_wgpu::{OrbitCamera, Viewer};
use egui::Context as EguiContext;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "cubespace-desktop", about = "Interactive 3D cube viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Facelet string to display (overrides the config file)
    #[arg(long)]
    cube_string: Option<String>,

    /// Path to a JSON viewer configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Errors from loading the viewer configuration.
#[derive(Debug, thiserror::Error)]
enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Viewer configuration. Defaults reproduce the reference viewer: a solved
/// cube of size 2 at the origin, no spacing, 30 degree field of view, camera
/// at (6, 3, 4) aimed at the cube center.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ViewerConfig {
    cube_size: f32,
    spacing_fraction: f32,
    origin: [f32; 3],
    fov_degrees: f32,
    eye: [f32; 3],
    cube_string: String,
    /// Wireframe line width. Cosmetic only; WebGPU draws hairlines.
    line_width: f32,
    /// Symbol-to-color overrides as 24-bit RGB values. Omitted symbols make
    /// the scheme reject strings that use them.
    colors: Option<BTreeMap<char, u32>>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            cube_size: 2.0,
            spacing_fraction: 0.0,
            origin: [0.0, 0.0, 0.0],
            fov_degrees: 30.0,
            eye: [6.0, 3.0, 4.0],
            cube_string: FaceletString::SOLVED.to_owned(),
            line_width: 1.0,
            colors: None,
        }
    }
}

impl ViewerConfig {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = serde_json::from_reader(std::fs::File::open(path)?)?;
        Ok(config)
    }

    fn scheme(&self) -> ColorScheme {
        match &self.colors {
            Some(map) => ColorScheme::new(
                map.iter().map(|(symbol, value)| (*symbol, Color(*value))),
                Color::WHITE,
            ),
            None => ColorScheme::classic(),
        }
    }

    fn params(&self) -> LayoutParams {
        LayoutParams {
            cube_size: self.cube_size,
            spacing_fraction: self.spacing_fraction,
            origin: Vec3::from_array(self.origin),
        }
    }
}

/// Application state: the layout, the camera, and pending UI changes.
struct AppState {
    scheme: ColorScheme,
    params: LayoutParams,
    facelets: FaceletString,
    layout: CubeLayout,
    camera: OrbitCamera,
    scheduler: FrameScheduler,
    visible: bool,
    // Inspector panel state
    string_edit: String,
    string_error: Option<String>,
    layout_dirty: bool,
    visible_dirty: bool,
    dragging: bool,
}

impl AppState {
    fn new(config: &ViewerConfig) -> Result<Self> {
        let scheme = config.scheme();
        let params = config.params();
        let facelets = FaceletString::parse(&config.cube_string)?;
        let layout = CubeLayout::build(&facelets, &scheme, &params)?;

        let view = RenderView {
            eye: Vec3::from_array(config.eye),
            target: layout.center(),
            fov_degrees: config.fov_degrees,
        };
        let camera = OrbitCamera::from_view(&view);

        if config.line_width != 1.0 {
            tracing::debug!(
                "line width {} requested; WebGPU draws hairline wireframes",
                config.line_width
            );
        }

        Ok(Self {
            scheme,
            params,
            string_edit: facelets.as_str().to_owned(),
            facelets,
            layout,
            camera,
            scheduler: FrameScheduler::new(),
            visible: true,
            string_error: None,
            layout_dirty: false,
            visible_dirty: false,
            dragging: false,
        })
    }

    /// Rebuild the layout from the current facelet string and parameters.
    fn rebuild(&mut self) {
        match CubeLayout::build(&self.facelets, &self.scheme, &self.params) {
            Ok(layout) => {
                self.camera.target = layout.center();
                self.layout = layout;
                self.layout_dirty = true;
            }
            Err(e) => {
                // Params changed under a string the scheme cannot resolve;
                // keep the previous layout on screen.
                self.string_error = Some(e.to_string());
            }
        }
    }

    /// Apply the edited facelet string from the inspector panel.
    fn apply_string(&mut self) {
        match FaceletString::parse(&self.string_edit) {
            Ok(facelets) => match CubeLayout::build(&facelets, &self.scheme, &self.params) {
                Ok(layout) => {
                    self.facelets = facelets;
                    self.camera.target = layout.center();
                    self.layout = layout;
                    self.layout_dirty = true;
                    self.string_error = None;
                    tracing::info!("applied facelet string");
                }
                Err(e) => self.string_error = Some(e.to_string()),
            },
            Err(e) => self.string_error = Some(e.to_string()),
        }
    }

    fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if !pressed {
            return;
        }
        match key {
            KeyCode::KeyV => {
                self.visible = !self.visible;
                self.visible_dirty = true;
                tracing::info!("cube visible: {}", self.visible);
            }
            KeyCode::Escape => {
                self.dragging = false;
            }
            _ => {}
        }
    }

    fn draw_ui(&mut self, ctx: &EguiContext) {
        egui::SidePanel::left("inspector")
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Cubespace");
                ui.separator();
                ui.label(format!(
                    "Pieces: {} corners, {} edges, {} centers, {} interior",
                    self.layout.count_of(PieceKind::Corner),
                    self.layout.count_of(PieceKind::Edge),
                    self.layout.count_of(PieceKind::Center),
                    self.layout.count_of(PieceKind::Interior)
                ));
                let pos = self.camera.position();
                ui.label(format!(
                    "Camera: ({:.1}, {:.1}, {:.1})",
                    pos.x, pos.y, pos.z
                ));
                ui.separator();

                ui.heading("Cube");
                ui.label("Facelet string (U F D L R B, row-major):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.string_edit)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY),
                );
                if ui.button("Apply").clicked() {
                    self.apply_string();
                }
                if let Some(error) = &self.string_error {
                    ui.colored_label(egui::Color32::RED, error);
                }
                ui.separator();

                let mut spacing = self.params.spacing_fraction;
                ui.add(egui::Slider::new(&mut spacing, 0.0..=0.9).text("spacing"));
                if spacing != self.params.spacing_fraction {
                    self.params.spacing_fraction = spacing;
                    self.rebuild();
                }

                let mut visible = self.visible;
                ui.checkbox(&mut visible, "Visible (V)");
                if visible != self.visible {
                    self.visible = visible;
                    self.visible_dirty = true;
                }

                ui.separator();
                ui.small("LMB drag: orbit | V: toggle cube");
            });
    }
}

struct CubeApp {
    state: AppState,
    window: Option<Arc<Window>>,
    viewer: Option<Viewer>,
    egui_ctx: EguiContext,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
}

impl CubeApp {
    fn new(state: AppState) -> Self {
        Self {
            state,
            window: None,
            viewer: None,
            egui_ctx: EguiContext::default(),
            egui_winit: None,
            egui_renderer: None,
        }
    }
}

impl ApplicationHandler for CubeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Cubespace")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let viewer = match Viewer::create(window.clone(), &self.state.layout) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!("failed to create viewer: {e}");
                event_loop.exit();
                return;
            }
        };

        self.state.camera.aspect = viewer.aspect();

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer =
            egui_wgpu::Renderer::new(viewer.device(), viewer.surface_format(), None, 1, false);

        self.window = Some(window);
        self.viewer = Some(viewer);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);

        self.state.scheduler.start();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window) {
            let response = egui_winit.on_window_event(window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.state.scheduler.stop();
                if let Some(viewer) = self.viewer.take() {
                    viewer.dispose();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(viewer) = &mut self.viewer {
                    viewer.resize(new_size.width, new_size.height);
                    self.state.camera.aspect = viewer.aspect();
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                self.state
                    .handle_key(key, key_state == ElementState::Pressed);
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: btn_state,
                ..
            } => {
                self.state.dragging = btn_state == ElementState::Pressed;
            }
            WindowEvent::RedrawRequested => {
                if self.state.scheduler.begin_frame().is_none() {
                    return;
                }

                let Some(viewer) = self.viewer.as_mut() else {
                    return;
                };

                // Apply changes queued by the inspector panel.
                if self.state.layout_dirty {
                    viewer.upload_layout(&self.state.layout);
                    self.state.layout_dirty = false;
                }
                if self.state.visible_dirty {
                    viewer.set_visible(self.state.visible);
                    self.state.visible_dirty = false;
                }

                let frame = match viewer.begin_frame() {
                    Ok(Some(frame)) => frame,
                    Ok(None) => return,
                    Err(e) => {
                        tracing::error!("frame error: {e}");
                        return;
                    }
                };

                viewer.render(&frame, &self.state.camera);

                let raw_input = self
                    .egui_winit
                    .as_mut()
                    .unwrap()
                    .take_egui_input(self.window.as_ref().unwrap());
                let full_output = self.egui_ctx.run(raw_input, |ctx| {
                    self.state.draw_ui(ctx);
                });

                self.egui_winit.as_mut().unwrap().handle_platform_output(
                    self.window.as_ref().unwrap(),
                    full_output.platform_output,
                );

                let paint_jobs = self
                    .egui_ctx
                    .tessellate(full_output.shapes, full_output.pixels_per_point);

                let (width, height) = viewer.size();
                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [width, height],
                    pixels_per_point: full_output.pixels_per_point,
                };

                {
                    let egui_renderer = self.egui_renderer.as_mut().unwrap();
                    let device = viewer.device();
                    let queue = viewer.queue();
                    for (id, image_delta) in &full_output.textures_delta.set {
                        egui_renderer.update_texture(device, queue, *id, image_delta);
                    }
                    let mut encoder =
                        device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("egui_encoder"),
                        });
                    egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut encoder,
                        &paint_jobs,
                        &screen_descriptor,
                    );
                    {
                        let mut pass = encoder
                            .begin_render_pass(&wgpu::RenderPassDescriptor {
                                label: Some("egui_pass"),
                                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                                    view: &frame.view,
                                    resolve_target: None,
                                    ops: wgpu::Operations {
                                        load: wgpu::LoadOp::Load,
                                        store: wgpu::StoreOp::Store,
                                    },
                                })],
                                depth_stencil_attachment: None,
                                ..Default::default()
                            })
                            .forget_lifetime();
                        egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
                    }
                    queue.submit(std::iter::once(encoder.finish()));
                    for id in &full_output.textures_delta.free {
                        egui_renderer.free_texture(id);
                    }
                }

                frame.present();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.state.dragging {
                self.state
                    .camera
                    .rotate(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(cube_string) = cli.cube_string {
        config.cube_string = cube_string;
    }

    tracing::info!("cubespace-desktop starting");

    let state = AppState::new(&config)?;
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = CubeApp::new(state);
    event_loop.run_app(&mut app)?;

    Ok(())
}
