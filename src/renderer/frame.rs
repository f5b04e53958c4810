//! Per-frame draw submission
//!
//! Takes the pose evaluator's draw list, writes one model-view matrix per
//! segment into the dynamic uniform buffer, and encodes one render pass
//! switching pipelines as the shape's primitive kind requires.

use nalgebra::Matrix4;

use super::state::{GPU_STATE, MAX_DRAWS, MODEL_STRIDE};
use crate::scene::SegmentDraw;

/// Background clear color (black, like the original demo)
const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Upload a new projection matrix (startup and projection-toggle frames only)
pub fn set_projection(projection: &Matrix4<f32>) {
    GPU_STATE.with(|state_cell| {
        let state_ref = state_cell.borrow();
        let state = match state_ref.as_ref() {
            Some(s) => s,
            None => return,
        };
        state
            .queue
            .write_buffer(&state.projection_buffer, 0, matrix_bytes(projection));
    });
}

/// Render one frame from the evaluated pose
pub fn draw_segments(draws: &[SegmentDraw]) {
    GPU_STATE.with(|state_cell| {
        let state_ref = state_cell.borrow();
        let state = match state_ref.as_ref() {
            Some(s) => s,
            None => return,
        };

        let draws = &draws[..draws.len().min(MAX_DRAWS as usize)];

        // One 256-byte uniform slot per segment
        let mut slots = vec![0u8; draws.len() * MODEL_STRIDE as usize];
        for (i, draw) in draws.iter().enumerate() {
            let offset = i * MODEL_STRIDE as usize;
            slots[offset..offset + 64].copy_from_slice(matrix_bytes(&draw.transform));
        }
        if !slots.is_empty() {
            state.queue.write_buffer(&state.model_buffer, 0, &slots);
        }

        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Arm Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &state.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
            for (i, draw) in draws.iter().enumerate() {
                let shape = state.shapes.get(draw.shape);
                pass.set_pipeline(state.pipeline_for(shape.kind));
                pass.set_bind_group(
                    0,
                    &state.bind_group,
                    &[(i as u64 * MODEL_STRIDE) as u32],
                );
                pass.draw(shape.start..shape.start + shape.count, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}

/// Column-major bytes of a matrix, as WGSL expects
fn matrix_bytes(m: &Matrix4<f32>) -> &[u8] {
    bytemuck::cast_slice(m.as_slice())
}
