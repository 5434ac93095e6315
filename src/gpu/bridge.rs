//! [`RenderBridge`] backed by wgpu buffers.
//!
//! The tunnel does not own render pipelines; it keeps the host renderer's
//! uniform and instance storage current. Per-beam uniform buffers are created
//! the first time a beam is seen and destroyed when the engine releases it.

use rustc_hash::FxHashMap;
use wgpu::util::DeviceExt;

use super::beam_gradient::{
    model_matrix, BeamUniform, FogUniform, BEAM_MATERIAL, TIME_UNIFORM,
};
use super::dynamic_buffer::TypedBuffer;
use super::mesh::cylinder_mesh;
use super::shader_composer::{ShaderComposer, BEAM_GRADIENT_WGSL};
use crate::bridge::RenderBridge;
use crate::camera::core::{Camera, CameraUniform};
use crate::camera::rig::CameraState;
use crate::error::TunnelError;
use crate::options::{CameraOptions, PostProcessingOptions};
use crate::scene::{
    CylinderGeometry, FogSettings, InstanceId, SceneDescription,
};

/// Byte offset of `time` inside [`BeamUniform`].
const BEAM_TIME_OFFSET: u64 = 64;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// Point light as stored in the light instance buffer.
pub struct LightRaw {
    /// World-space position.
    pub position: [f32; 3],
    /// Light intensity.
    pub intensity: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
    pub(crate) _pad: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// Rail as stored in the rail instance buffer.
pub struct RailRaw {
    /// Model matrix.
    pub model: [[f32; 4]; 4],
    /// Linear RGB color.
    pub color: [f32; 3],
    pub(crate) _pad: f32,
}

/// Uploaded cylinder mesh and the shape it was built from.
pub struct MeshBuffers {
    /// `MeshVertex` vertex buffer.
    pub vertices: wgpu::Buffer,
    /// `u32` triangle-list index buffer.
    pub indices: wgpu::Buffer,
    /// Number of indices.
    pub index_count: u32,
    geometry: CylinderGeometry,
}

impl MeshBuffers {
    fn upload(
        device: &wgpu::Device,
        label: &str,
        geometry: CylinderGeometry,
    ) -> Self {
        let mesh = cylinder_mesh(&geometry);
        let vertices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let indices =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            vertices,
            indices,
            index_count: mesh.indices.len() as u32,
            geometry,
        }
    }

    /// Re-tessellate if `geometry` differs from the uploaded shape.
    fn refresh(
        slot: &mut Option<Self>,
        device: &wgpu::Device,
        label: &str,
        geometry: CylinderGeometry,
    ) {
        if slot.as_ref().is_some_and(|m| m.geometry == geometry) {
            return;
        }
        if let Some(old) = slot.take() {
            old.vertices.destroy();
            old.indices.destroy();
        }
        log::debug!("{label}: tessellating {geometry:?}");
        *slot = Some(Self::upload(device, label, geometry));
    }
}

/// Pending instance buffer swaps since the host last rebuilt its bind
/// groups.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Reallocations {
    pending: bool,
    generation: u64,
}

impl Reallocations {
    fn record(&mut self, reallocated: bool) {
        if reallocated {
            self.pending = true;
            self.generation += 1;
        }
    }

    fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// GPU-side storage the tunnel writes into every frame.
pub struct GpuTunnelResources {
    /// Composed beam gradient shader for the host's beam pipeline.
    pub beam_shader: wgpu::ShaderModule,
    camera_buffer: wgpu::Buffer,
    fog_buffer: wgpu::Buffer,
    beam_uniforms: FxHashMap<InstanceId, wgpu::Buffer>,
    lights: TypedBuffer<LightRaw>,
    rails: TypedBuffer<RailRaw>,
    beam_mesh: Option<MeshBuffers>,
    rail_mesh: Option<MeshBuffers>,
    camera_options: CameraOptions,
    camera_state: CameraState,
    bloom: Option<PostProcessingOptions>,
    reallocations: Reallocations,
}

impl GpuTunnelResources {
    /// Allocate camera/fog uniforms and instance buffers and compose the
    /// beam shader.
    pub fn new(
        device: &wgpu::Device,
        composer: &mut ShaderComposer,
        camera_options: &CameraOptions,
    ) -> Result<Self, TunnelError> {
        let beam_shader = composer.compose(
            device,
            "Beam Gradient Shader",
            BEAM_GRADIENT_WGSL,
            "beam_gradient.wgsl",
        )?;
        log::debug!(
            "beam material: tone_mapped={}, fog={}",
            BEAM_MATERIAL.tone_mapped,
            BEAM_MATERIAL.fog
        );

        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Tunnel Camera Buffer"),
                contents: bytemuck::bytes_of(&CameraUniform::new()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let fog_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Tunnel Fog Buffer"),
                contents: bytemuck::bytes_of(&FogUniform::from_settings(None)),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        Ok(Self {
            beam_shader,
            camera_buffer,
            fog_buffer,
            beam_uniforms: FxHashMap::default(),
            lights: TypedBuffer::with_capacity(
                device,
                "Tunnel Light Instances",
                8,
                wgpu::BufferUsages::STORAGE,
            ),
            rails: TypedBuffer::with_capacity(
                device,
                "Tunnel Rail Instances",
                32,
                wgpu::BufferUsages::VERTEX,
            ),
            beam_mesh: None,
            rail_mesh: None,
            camera_options: camera_options.clone(),
            camera_state: CameraState::default(),
            bloom: None,
            reallocations: Reallocations::default(),
        })
    }

    /// Camera uniform buffer (`@group(0) @binding(0)`).
    #[must_use]
    pub fn camera_buffer(&self) -> &wgpu::Buffer {
        &self.camera_buffer
    }

    /// Fog uniform buffer (`@group(0) @binding(1)`).
    #[must_use]
    pub fn fog_buffer(&self) -> &wgpu::Buffer {
        &self.fog_buffer
    }

    /// Uniform buffer of a live beam (`@group(1) @binding(0)`).
    pub fn beam_buffer(&self, id: InstanceId) -> Option<&wgpu::Buffer> {
        self.beam_uniforms.get(&id)
    }

    /// Number of beams currently holding uniform buffers.
    #[must_use]
    pub fn live_beams(&self) -> usize {
        self.beam_uniforms.len()
    }

    /// Light instance buffer and count.
    #[must_use]
    pub fn lights(&self) -> (&wgpu::Buffer, usize) {
        (self.lights.buffer(), self.lights.count())
    }

    /// Rail instance buffer and count.
    #[must_use]
    pub fn rails(&self) -> (&wgpu::Buffer, usize) {
        (self.rails.buffer(), self.rails.count())
    }

    /// Beam cylinder mesh, once a beam has been submitted.
    #[must_use]
    pub fn beam_mesh(&self) -> Option<&MeshBuffers> {
        self.beam_mesh.as_ref()
    }

    /// Rail cylinder mesh, once a rail has been submitted.
    #[must_use]
    pub fn rail_mesh(&self) -> Option<&MeshBuffers> {
        self.rail_mesh.as_ref()
    }

    /// Bloom configuration requested by the engine.
    #[must_use]
    pub fn bloom(&self) -> Option<&PostProcessingOptions> {
        self.bloom.as_ref()
    }

    /// Whether the light or rail instance buffer was reallocated since the
    /// last [`take_buffers_reallocated`](Self::take_buffers_reallocated).
    /// Bind groups over those buffers must be recreated when set.
    #[must_use]
    pub fn buffers_reallocated(&self) -> bool {
        self.reallocations.pending
    }

    /// Read and clear the reallocation flag.
    pub fn take_buffers_reallocated(&mut self) -> bool {
        self.reallocations.take()
    }

    /// Count of instance buffer reallocations so far, for hosts that cache
    /// bind groups per generation.
    #[must_use]
    pub fn buffer_generation(&self) -> u64 {
        self.reallocations.generation
    }

    fn beam_buffer_or_create(
        &mut self,
        device: &wgpu::Device,
        id: InstanceId,
    ) -> &wgpu::Buffer {
        self.beam_uniforms.entry(id).or_insert_with(|| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Beam Uniform Buffer"),
                size: size_of::<BeamUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        })
    }
}

impl Drop for GpuTunnelResources {
    fn drop(&mut self) {
        for (_, buffer) in self.beam_uniforms.drain() {
            buffer.destroy();
        }
    }
}

/// Per-frame [`RenderBridge`] view over [`GpuTunnelResources`].
pub struct WgpuBridge<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    resources: &'a mut GpuTunnelResources,
}

impl<'a> WgpuBridge<'a> {
    /// Bridge writing through `queue` into `resources`.
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        resources: &'a mut GpuTunnelResources,
    ) -> Self {
        Self {
            device,
            queue,
            resources,
        }
    }

    fn write_camera(&self, aspect: f32) {
        let camera = Camera::from_state(
            &self.resources.camera_state,
            aspect,
            &self.resources.camera_options,
        );
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        self.queue.write_buffer(
            &self.resources.camera_buffer,
            0,
            bytemuck::bytes_of(&uniform),
        );
    }
}

impl RenderBridge for WgpuBridge<'_> {
    fn configure_post_processing(&mut self, options: &PostProcessingOptions) {
        self.resources.bloom = Some(options.clone());
    }

    fn set_camera_z(&mut self, z: f32) {
        self.resources.camera_state = CameraState { z };
    }

    fn set_fog(&mut self, fog: Option<&FogSettings>) {
        self.queue.write_buffer(
            &self.resources.fog_buffer,
            0,
            bytemuck::bytes_of(&FogUniform::from_settings(fog)),
        );
    }

    fn set_uniform(&mut self, instance: InstanceId, name: &str, value: f32) {
        if name != TIME_UNIFORM {
            log::warn!("beam shader has no uniform '{name}'");
            return;
        }
        let buffer =
            self.resources.beam_buffer_or_create(self.device, instance);
        self.queue
            .write_buffer(buffer, BEAM_TIME_OFFSET, bytemuck::bytes_of(&value));
    }

    fn release_uniforms(&mut self, instance: InstanceId) {
        if let Some(buffer) = self.resources.beam_uniforms.remove(&instance) {
            buffer.destroy();
        }
    }

    fn submit_scene(&mut self, scene: &SceneDescription) {
        self.write_camera(scene.aspect);

        // Beam length follows the aspect ratio, so the mesh is rebuilt on
        // resize; rails only change with the options.
        if let Some(beam) = scene.beams.first() {
            MeshBuffers::refresh(
                &mut self.resources.beam_mesh,
                self.device,
                "Beam Mesh",
                beam.geometry,
            );
        }
        if let Some(rail) = scene.rails.first() {
            MeshBuffers::refresh(
                &mut self.resources.rail_mesh,
                self.device,
                "Rail Mesh",
                rail.geometry,
            );
        }

        for beam in &scene.beams {
            let uniform = BeamUniform::from_instance(beam);
            let buffer =
                self.resources.beam_buffer_or_create(self.device, beam.id);
            self.queue.write_buffer(buffer, 0, bytemuck::bytes_of(&uniform));
        }

        let lights: Vec<LightRaw> = scene
            .lights
            .iter()
            .map(|l| LightRaw {
                position: l.position.to_array(),
                intensity: l.intensity,
                color: l.color.to_array(),
                _pad: 0.0,
            })
            .collect();
        let lights_grew =
            self.resources.lights.write(self.device, self.queue, &lights);

        let rails: Vec<RailRaw> = scene
            .rails
            .iter()
            .map(|r| RailRaw {
                model: model_matrix(r.position, r.rotation).to_cols_array_2d(),
                color: r.color.to_array(),
                _pad: 0.0,
            })
            .collect();
        let rails_grew =
            self.resources.rails.write(self.device, self.queue, &rails);
        self.resources.reallocations.record(lights_grew || rails_grew);
    }
}
