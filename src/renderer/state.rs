//! GPU state management - WebGPU device, queue, surface initialization
//!
//! One pipeline per primitive kind (the wire cube is a line strip, the solid
//! cube a triangle list, the axes plain lines), a static vertex buffer
//! holding every registered shape, and a dynamic-offset uniform buffer with
//! one model-view slot per drawn segment.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::shapes::{build_shapes, PrimitiveKind, ShapeSet, Vertex};

/// Fixed canvas size, matching the demo page
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

/// Aspect ratio used for both projection variants
pub const ASPECT: f32 = CANVAS_WIDTH as f32 / CANVAS_HEIGHT as f32;

/// Byte stride between model-view uniform slots (WebGPU alignment minimum)
pub const MODEL_STRIDE: u64 = 256;

/// Uniform slots reserved per frame; the arm needs 10
pub const MAX_DRAWS: u64 = 16;

/// Errors that can occur during GPU initialization
pub enum GpuStateError {
    NoWindow,
    NoDocument,
    NoCanvas,
    SurfaceCreationFailed(String),
    NoAdapter,
    DeviceCreationFailed(String),
}

impl From<GpuStateError> for JsValue {
    fn from(err: GpuStateError) -> Self {
        match err {
            GpuStateError::NoWindow => JsValue::from_str("No window found"),
            GpuStateError::NoDocument => JsValue::from_str("No document found"),
            GpuStateError::NoCanvas => JsValue::from_str("No canvas with id 'gl-canvas' found"),
            GpuStateError::SurfaceCreationFailed(e) => {
                JsValue::from_str(&format!("Surface creation failed: {}", e))
            }
            GpuStateError::NoAdapter => JsValue::from_str("Failed to find a suitable GPU adapter"),
            GpuStateError::DeviceCreationFailed(e) => {
                JsValue::from_str(&format!("Device creation failed: {}", e))
            }
        }
    }
}

/// Holds all WebGPU state for rendering
pub(crate) struct GpuState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub depth_view: wgpu::TextureView,
    pub line_pipeline: wgpu::RenderPipeline,
    pub line_strip_pipeline: wgpu::RenderPipeline,
    pub triangle_pipeline: wgpu::RenderPipeline,
    pub vertex_buffer: wgpu::Buffer,
    pub projection_buffer: wgpu::Buffer,
    pub model_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub shapes: ShapeSet,
}

impl GpuState {
    pub fn pipeline_for(&self, kind: PrimitiveKind) -> &wgpu::RenderPipeline {
        match kind {
            PrimitiveKind::Lines => &self.line_pipeline,
            PrimitiveKind::LineStrip => &self.line_strip_pipeline,
            PrimitiveKind::Triangles => &self.triangle_pipeline,
        }
    }
}

// Thread-local storage for GPU state (WASM is single-threaded)
thread_local! {
    pub(crate) static GPU_STATE: RefCell<Option<GpuState>> = RefCell::new(None);
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    cull_mode: Option<wgpu::Face>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Segment Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            cull_mode,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: wgpu::TextureFormat::Depth24Plus,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

/// Initialize WebGPU: adapter, device, surface, pipelines, geometry upload
pub async fn initialize_gpu() -> Result<(), GpuStateError> {
    let window = web_sys::window().ok_or(GpuStateError::NoWindow)?;
    let document = window.document().ok_or(GpuStateError::NoDocument)?;
    let canvas = document
        .get_element_by_id("gl-canvas")
        .ok_or(GpuStateError::NoCanvas)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| GpuStateError::NoCanvas)?;

    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
        .map_err(|e| GpuStateError::SurfaceCreationFailed(format!("{:?}", e)))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or(GpuStateError::NoAdapter)?;

    let (device, queue) = adapter
        .request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Robot Arm Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
            },
            None,
        )
        .await
        .map_err(|e| GpuStateError::DeviceCreationFailed(format!("{:?}", e)))?;

    // Configure surface
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
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: surface_caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    // Depth buffer (the arm segments overlap from most view angles)
    let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth24Plus,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let depth_view = depth_texture.create_view(&wgpu::TextureViewDescriptor::default());

    // Shader shared by all three pipelines
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Segment Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("../shader.wgsl").into()),
    });

    // Uniforms: one projection matrix plus a dynamic-offset model-view slot
    // per segment draw
    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Uniform Layout"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(64),
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(64),
                },
                count: None,
            },
        ],
    });

    let projection_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Projection Buffer"),
        size: 64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let model_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Model Buffer"),
        size: MODEL_STRIDE * MAX_DRAWS,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Uniform Bind Group"),
        layout: &bind_group_layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &model_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(64),
                }),
            },
        ],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Pipeline Layout"),
        bind_group_layouts: &[&bind_group_layout],
        push_constant_ranges: &[],
    });

    let line_pipeline = create_pipeline(
        &device,
        &pipeline_layout,
        &shader,
        surface_format,
        wgpu::PrimitiveTopology::LineList,
        None,
    );
    let line_strip_pipeline = create_pipeline(
        &device,
        &pipeline_layout,
        &shader,
        surface_format,
        wgpu::PrimitiveTopology::LineStrip,
        None,
    );
    let triangle_pipeline = create_pipeline(
        &device,
        &pipeline_layout,
        &shader,
        surface_format,
        wgpu::PrimitiveTopology::TriangleList,
        Some(wgpu::Face::Back),
    );

    // Upload every registered shape once; draws reference vertex ranges
    let (shapes, vertices) = build_shapes();
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Shape Vertex Buffer"),
        size: (vertices.len() * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    queue.write_buffer(&vertex_buffer, 0, bytemuck::cast_slice(&vertices));

    GPU_STATE.with(|state| {
        *state.borrow_mut() = Some(GpuState {
            device,
            queue,
            surface,
            depth_view,
            line_pipeline,
            line_strip_pipeline,
            triangle_pipeline,
            vertex_buffer,
            projection_buffer,
            model_buffer,
            bind_group,
            shapes,
        });
    });

    Ok(())
}
