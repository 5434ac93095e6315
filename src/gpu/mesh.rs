//! Closed cylinder mesh for beams and rails, centered on the origin with its
//! axis along local y.

use std::f32::consts::TAU;

use crate::scene::CylinderGeometry;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Position-only vertex (`VertexInput` in `beam_gradient.wgsl`).
pub struct MeshVertex {
    /// Local-space position.
    pub position: [f32; 3],
}

impl MeshVertex {
    /// Vertex buffer layout for pipelines consuming this mesh.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> =
        wgpu::VertexBufferLayout {
            array_stride: size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        };
}

/// Triangle mesh ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderMesh {
    /// Ring vertices (bottom ring, top ring) followed by the two cap centers.
    pub vertices: Vec<MeshVertex>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

/// Tessellate a cylinder. Fewer than 3 radial segments are raised to 3.
#[must_use]
pub fn cylinder_mesh(geometry: &CylinderGeometry) -> CylinderMesh {
    let segments = geometry.radial_segments.max(3);
    let half = geometry.length * 0.5;

    let mut vertices = Vec::with_capacity(segments as usize * 2 + 2);
    for y in [-half, half] {
        for s in 0..segments {
            let theta = s as f32 / segments as f32 * TAU;
            vertices.push(MeshVertex {
                position: [
                    geometry.radius * theta.sin(),
                    y,
                    geometry.radius * theta.cos(),
                ],
            });
        }
    }
    let bottom_center = segments * 2;
    let top_center = bottom_center + 1;
    vertices.push(MeshVertex {
        position: [0.0, -half, 0.0],
    });
    vertices.push(MeshVertex {
        position: [0.0, half, 0.0],
    });

    let mut indices = Vec::with_capacity(segments as usize * 12);
    for s in 0..segments {
        let next = (s + 1) % segments;
        let (b0, b1) = (s, next);
        let (t0, t1) = (s + segments, next + segments);
        // side quad
        indices.extend_from_slice(&[b0, b1, t0, t0, b1, t1]);
        // caps
        indices.extend_from_slice(&[bottom_center, b1, b0]);
        indices.extend_from_slice(&[top_center, t0, t1]);
    }

    CylinderMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beam() -> CylinderGeometry {
        CylinderGeometry {
            radius: 0.002,
            length: 12.0,
            radial_segments: 6,
        }
    }

    #[test]
    fn counts_match_segments() {
        let mesh = cylinder_mesh(&beam());
        assert_eq!(mesh.vertices.len(), 14);
        assert_eq!(mesh.indices.len(), 72);
        let max = *mesh.indices.iter().max().unwrap() as usize;
        assert!(max < mesh.vertices.len());
    }

    #[test]
    fn spans_length_along_y() {
        let mesh = cylinder_mesh(&beam());
        let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.position[1]).collect();
        let min = ys.iter().copied().fold(f32::INFINITY, f32::min);
        let max = ys.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert_eq!((min, max), (-6.0, 6.0));
        for v in &mesh.vertices {
            let r = v.position[0].hypot(v.position[2]);
            assert!(r <= 0.002 + 1e-7);
        }
    }

    #[test]
    fn degenerate_segment_count_is_raised() {
        let mesh = cylinder_mesh(&CylinderGeometry {
            radial_segments: 1,
            ..beam()
        });
        assert_eq!(mesh.vertices.len(), 8);
    }
}
