//! Canonical vertex format and `wgpu::VertexBufferLayout` for terrain
//! rendering.
//!
//! Every terrain render pipeline references [`TERRAIN_VERTEX_LAYOUT`] so
//! the CPU-side struct and the shader inputs cannot drift apart.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |

use std::mem;

use bytemuck::{Pod, Zeroable};
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

/// One terrain vertex: world-space position and unit surface normal,
/// interleaved for upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 24]);

/// Vertex attributes for the terrain vertex format.
///
/// Two `Float32x3` attributes covering all 24 bytes of [`TerrainVertex`].
pub const TERRAIN_VERTEX_ATTRIBUTES: [VertexAttribute; 2] = [
    // Attribute 0: position
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    // Attribute 1: normal
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
];

/// The vertex buffer layout for all terrain render pipelines.
pub const TERRAIN_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<TerrainVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &TERRAIN_VERTEX_ATTRIBUTES,
};

/// Return the terrain vertex buffer layout as an owned value.
///
/// Equivalent to [`TERRAIN_VERTEX_LAYOUT`] but convenient when a `'static`
/// lifetime is awkward to thread through.
pub fn terrain_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    TERRAIN_VERTEX_LAYOUT
}

// ---------------------------------------------------------------------------
// Compile-time validation
// ---------------------------------------------------------------------------

/// Stride must match `TerrainVertex` size.
const _: () = assert!(
    mem::size_of::<TerrainVertex>() == 24,
    "TerrainVertex size changed; update TERRAIN_VERTEX_LAYOUT"
);

/// Attribute offsets must be correct.
const _: () = assert!(TERRAIN_VERTEX_ATTRIBUTES[0].offset == 0);
const _: () = assert!(TERRAIN_VERTEX_ATTRIBUTES[1].offset == 12);

/// Last attribute must fit within the stride.
const _: () = assert!(
    TERRAIN_VERTEX_ATTRIBUTES[1].offset + 12 <= mem::size_of::<TerrainVertex>() as u64,
    "Last attribute exceeds vertex stride"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stride_matches_vertex_struct_size() {
        assert_eq!(
            TERRAIN_VERTEX_LAYOUT.array_stride,
            mem::size_of::<TerrainVertex>() as u64,
        );
    }

    #[test]
    fn test_attributes_cover_struct_without_overlap() {
        assert_eq!(TERRAIN_VERTEX_ATTRIBUTES[0].offset, 0);
        assert_eq!(TERRAIN_VERTEX_ATTRIBUTES[1].offset, 12);
        assert_eq!(TERRAIN_VERTEX_ATTRIBUTES[0].format, VertexFormat::Float32x3);
        assert_eq!(TERRAIN_VERTEX_ATTRIBUTES[1].format, VertexFormat::Float32x3);
        for (i, attr) in TERRAIN_VERTEX_ATTRIBUTES.iter().enumerate() {
            assert_eq!(attr.shader_location, i as u32);
        }
    }

    #[test]
    fn test_vertex_bytes_roundtrip_through_pod_cast() {
        let vertex = TerrainVertex {
            position: [1.0, 2.0, 3.0],
            normal: [0.0, 1.0, 0.0],
        };
        let bytes: &[u8] = bytemuck::bytes_of(&vertex);
        assert_eq!(bytes.len(), 24);
        let back: &TerrainVertex = bytemuck::from_bytes(bytes);
        assert_eq!(*back, vertex);
    }

    #[test]
    fn test_layout_is_valid_for_wgpu_pipeline() {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            force_fallback_adapter: true,
            ..Default::default()
        }));

        let Ok(adapter) = adapter else {
            // No adapter available (headless CI without GPU); skip.
            return;
        };

        let (device, _queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default()))
                .expect("failed to create device");

        let shader_source = r#"
            @vertex
            fn vs_main(
                @location(0) position: vec3<f32>,
                @location(1) normal: vec3<f32>,
            ) -> @builtin(position) vec4<f32> {
                let lit = position + normal * 0.0;
                return vec4<f32>(lit, 1.0);
            }

            @fragment
            fn fs_main() -> @location(0) vec4<f32> {
                return vec4<f32>(1.0, 1.0, 1.0, 1.0);
            }
        "#;

        let shader: wgpu::ShaderModule =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("test_terrain_shader"),
                source: wgpu::ShaderSource::Wgsl(shader_source.into()),
            });

        let _pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("test_terrain_pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[TERRAIN_VERTEX_LAYOUT],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: wgpu::TextureFormat::Bgra8UnormSrgb,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview_mask: None,
            cache: None,
        });
    }

    #[test]
    fn test_helper_returns_same_layout() {
        let layout = terrain_vertex_buffer_layout();
        assert_eq!(layout.array_stride, TERRAIN_VERTEX_LAYOUT.array_stride);
        assert_eq!(
            layout.attributes.len(),
            TERRAIN_VERTEX_LAYOUT.attributes.len()
        );
    }
}
