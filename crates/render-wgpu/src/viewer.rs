use crate::camera::OrbitCamera;
use crate::gpu::WgpuRenderer;
use cubespace_layout::CubeLayout;
use std::sync::Arc;
use winit::window::Window;

/// Errors from viewer construction and frame acquisition.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("failed to acquire graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("failed to acquire frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),
}

/// One acquired swapchain frame. Call `present` after all passes have drawn
/// into `view`.
pub struct ViewerFrame {
    texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
}

impl ViewerFrame {
    pub fn present(self) {
        self.texture.present();
    }
}

/// Explicit GPU context for the cube viewer.
///
/// Owns the surface, device, queue, and cube renderer with a
/// create/render/dispose lifecycle; nothing here lives in module-level
/// state. The caller keeps the camera and the layout.
pub struct Viewer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
}

impl Viewer {
    /// Set up the GPU and build cube geometry from the given layout.
    pub fn create(window: Arc<Window>, layout: &CubeLayout) -> Result<Self, ViewerError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(ViewerError::NoAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("cubespace_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = WgpuRenderer::new(&device, surface_format, size.width, size.height, layout);

        tracing::info!(
            "viewer created with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
        })
    }

    /// Acquire the next frame. Returns `Ok(None)` when the surface was lost
    /// and has been reconfigured; the caller should simply skip this frame.
    pub fn begin_frame(&mut self) -> Result<Option<ViewerFrame>, ViewerError> {
        match self.surface.get_current_texture() {
            Ok(texture) => {
                let view = texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                Ok(Some(ViewerFrame { texture, view }))
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Draw the cube scene into an acquired frame.
    pub fn render(&self, frame: &ViewerFrame, camera: &OrbitCamera) {
        self.renderer
            .render(&self.device, &self.queue, &frame.view, camera);
    }

    /// Replace the cube geometry with a new layout.
    pub fn upload_layout(&mut self, layout: &CubeLayout) {
        self.renderer.upload(&self.device, layout);
    }

    /// Show or hide all cubelets together.
    pub fn set_visible(&mut self, visible: bool) {
        self.renderer.set_visible(visible);
    }

    pub fn visible(&self) -> bool {
        self.renderer.visible()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    /// Width / height of the current surface, for camera aspect.
    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.renderer.surface_format()
    }

    /// Tear the context down. GPU resources are released as the fields drop;
    /// the explicit consume marks the end of the viewer lifecycle.
    pub fn dispose(self) {
        tracing::info!("viewer disposed");
    }
}
